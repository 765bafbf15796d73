use smartkart_core::{StoreGraph, StoreLayout};
use std::{error::Error, fs::File, io::BufReader, path::PathBuf};
use tracing::info;

pub struct SmartKartApp {
    pub layout_path: PathBuf,
}

impl SmartKartApp {
    pub fn new(layout_path: PathBuf) -> Result<Self, Box<dyn Error>> {
        if !layout_path.exists() {
            return Err(format!("Layout file does not exist: {:?}", layout_path).into());
        }

        Ok(Self { layout_path })
    }

    pub fn load_store(&self) -> Result<StoreGraph, Box<dyn Error>> {
        let reader = BufReader::new(File::open(&self.layout_path)?);
        let layout: StoreLayout = serde_json::from_reader(reader)
            .map_err(|e| format!("Invalid layout file {:?}: {}", self.layout_path, e))?;
        let store = layout.build()?;

        info!(
            locations = store.location_count(),
            paths = store.path_count(),
            "loaded store layout"
        );
        Ok(store)
    }
}
