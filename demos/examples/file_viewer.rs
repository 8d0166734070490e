// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A file viewer: sibling navigation, drilling into an archive, a windowed
//! carousel, and toasts raised along the way.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p perch_demos --example file_viewer`

use std::cell::RefCell;
use std::rc::Rc;

use perch_carousel::VirtualCarousel;
use perch_navigator::{FileNavigationStack, Navigable};
use perch_toast::{ToastRequest, ToastStore, ToastVariant};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Debug)]
struct File {
    path: String,
    size: u64,
}

impl File {
    fn new(path: &str, size: u64) -> Self {
        Self {
            path: path.to_owned(),
            size,
        }
    }
}

impl Navigable for File {
    type Id = String;

    fn id(&self) -> &String {
        &self.path
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let related: Vec<File> = (1..=40)
        .map(|i| File::new(&format!("photos/img_{i:03}.jpg"), 1_000 * i))
        .collect();
    let anchor = related[0].clone();

    // Shared with the navigation callback, which raises a toast for large files.
    let toasts = Rc::new(RefCell::new(ToastStore::default()));
    let clock = Rc::new(RefCell::new(0_u64));

    let mut nav = FileNavigationStack::new(anchor, &related);
    {
        let toasts = Rc::clone(&toasts);
        let clock = Rc::clone(&clock);
        nav.on_navigate(move |file: &File| {
            if file.size > 30_000 {
                toasts.borrow_mut().push(
                    ToastRequest::new(format!("{} is large", file.path))
                        .with_variant(ToastVariant::Warning),
                    *clock.borrow(),
                );
            }
        });
    }
    let mut carousel = VirtualCarousel::new(nav.all_files().len(), 2);

    let show = |nav: &FileNavigationStack<File>, carousel: &mut VirtualCarousel| {
        let mounted: Vec<_> = carousel
            .slides_at(nav.navigation_set(), nav.current_index())
            .iter()
            .map(|s| if s.is_active { format!("[{}]", s.index) } else { s.index.to_string() })
            .collect();
        println!(
            "{:<28} {:>7}  mounted: {}",
            nav.current().path,
            nav.slide_label(),
            mounted.join(" ")
        );
    };

    show(&nav, &mut carousel);
    nav.next();
    show(&nav, &mut carousel);
    nav.go_to(&related[34]);
    *clock.borrow_mut() = 100;
    show(&nav, &mut carousel);
    // Same file again later: the toast folds instead of stacking.
    nav.prev();
    *clock.borrow_mut() = 200;
    nav.next();
    show(&nav, &mut carousel);

    nav.dive_into_child(File::new("photos/img_035.jpg#exif", 512));
    show(&nav, &mut carousel);
    let crumbs: Vec<_> = nav
        .breadcrumbs()
        .iter()
        .map(|c| c.item.path.as_str())
        .collect();
    println!("breadcrumbs: {}", crumbs.join(" > "));
    nav.back_from_child();
    show(&nav, &mut carousel);

    let mut toasts = toasts.borrow_mut();
    for toast in toasts.iter() {
        println!("toast: {} (x{})", toast.message, toast.count);
    }
    let gone = toasts.expire(10_000);
    println!("expired {} toast(s)", gone.len());
}
