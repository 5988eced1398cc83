use pixel_matrix::config::cc_demo::{load_config, BackendKind, CcDemoConfig};
use pixel_matrix::io::{load_grayscale_image, threshold_into, write_json_file, GrayRaster};
use pixel_matrix::store::{DenseStore, PixelStore, RleStore};
use pixel_matrix::view::View;
use pixel_matrix::{label_components, Label, Rect};
use serde::Serialize;
use std::cell::RefCell;
use std::env;
use std::path::Path;
use std::rc::Rc;

#[derive(Serialize)]
struct ComponentSummary {
    label: Label,
    rect: Rect,
    pixels: usize,
}

#[derive(Serialize)]
struct LabelingSummary {
    width: usize,
    height: usize,
    backend: &'static str,
    components: Vec<ComponentSummary>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    let gray = load_grayscale_image(&config.input)?;

    match config.backend {
        BackendKind::Rle => {
            let store = Rc::new(RefCell::new(RleStore::new(gray.height(), gray.width())));
            label_and_report(&store, &gray, &config, "rle")?;
            println!(
                "rle: {} runs for {} pixels",
                store.borrow().run_count(),
                store.borrow().len()
            );
            Ok(())
        }
        BackendKind::Dense => {
            let store = Rc::new(RefCell::new(DenseStore::new(gray.height(), gray.width())));
            label_and_report(&store, &gray, &config, "dense")
        }
    }
}

fn label_and_report<S: PixelStore>(
    store: &Rc<RefCell<S>>,
    gray: &GrayRaster,
    config: &CcDemoConfig,
    backend: &'static str,
) -> Result<(), String> {
    let view = View::full(store);
    threshold_into(gray, &view, config.threshold).map_err(|e| e.to_string())?;

    let components = label_components(&view).map_err(|e| e.to_string())?;
    let summary = LabelingSummary {
        width: gray.width(),
        height: gray.height(),
        backend,
        components: components
            .iter()
            .map(|cc| ComponentSummary {
                label: cc.label(),
                rect: cc.rect(),
                pixels: cc.pixel_count(),
            })
            .collect(),
    };

    println!(
        "{} components (backend={backend}, {}x{})",
        summary.components.len(),
        summary.width,
        summary.height
    );
    for component in &summary.components {
        println!(
            "  label={} ul=({}, {}) lr=({}, {}) pixels={}",
            component.label,
            component.rect.ul_y,
            component.rect.ul_x,
            component.rect.lr_y,
            component.rect.lr_x,
            component.pixels
        );
    }

    if let Some(path) = &config.output.components_json {
        write_json_file(path, &summary)?;
    }
    Ok(())
}

fn usage() -> String {
    "Usage: cc_demo <config.json>".to_string()
}
