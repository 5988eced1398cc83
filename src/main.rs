use pixel_matrix::store::RleStore;
use pixel_matrix::view::{RasterView, View};
use pixel_matrix::{label_components, UNLABELED_FOREGROUND};
use std::cell::RefCell;
use std::rc::Rc;

fn main() {
    // Demo stub: draws two blobs into an RLE raster and labels them
    let store = Rc::new(RefCell::new(RleStore::new(64, 64)));
    let view = View::full(&store);
    for y in 10..20 {
        for x in 10..20 {
            view.set(y, x, UNLABELED_FOREGROUND);
        }
    }
    for y in 40..44 {
        for x in 30..50 {
            view.set(y, x, UNLABELED_FOREGROUND);
        }
    }

    match label_components(&view) {
        Ok(components) => {
            println!("components={}", components.len());
            for cc in &components {
                let rect = cc.rect();
                println!(
                    "label={} ul=({}, {}) lr=({}, {}) pixels={}",
                    cc.label(),
                    rect.ul_y,
                    rect.ul_x,
                    rect.lr_y,
                    rect.lr_x,
                    cc.pixel_count()
                );
            }
        }
        Err(err) => eprintln!("labeling failed: {err}"),
    }
}
