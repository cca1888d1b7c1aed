use crate::apps::SubApp;
use clap::Parser;

use std::error::Error;

use wdscan::avatar::load_snapshot_file;
use wdscan::scan::{generate_report, report_text};

#[derive(Parser, Debug)]
pub struct ScanApp {
    #[arg(help = "Path to input avatar snapshot (.json)", required = true)]
    pub snapshot_path: String,
}

impl SubApp for ScanApp {
    fn process(&mut self) -> Result<(), Box<dyn Error>> {
        let avatar = load_snapshot_file(&self.snapshot_path)?;

        let lines = generate_report(Some(&avatar));
        println!("{}", report_text(&lines));

        Ok(())
    }
}
