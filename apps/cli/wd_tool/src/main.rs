mod apps;

use std::process::ExitCode;

use crate::apps::WdTool;

fn main() -> ExitCode {
    let mut tool = WdTool::new();

    match tool.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
