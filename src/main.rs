mod cli;
mod settings;

use anyhow::Result;
use binlift::discovery::SearchDirs;
use binlift::logging::SessionLog;
use binlift::ui::{self, App};
use cli::parse_cli;

fn main() -> Result<()> {
    let cli = parse_cli();
    let resolved = settings::load(&cli)?;

    let dirs = SearchDirs::discover(&resolved.extra_dirs);
    let candidates = dirs.candidates();

    if cli.list {
        for name in &candidates {
            println!("{name}");
        }
        return Ok(());
    }

    let mut log = SessionLog::open();
    log.event(&format!(
        "session start: {} candidates from {} directories",
        candidates.len(),
        dirs.dirs().len()
    ));

    let mut app = App::new(candidates, resolved.ui);
    if app.filtered_len() == 0 {
        app.status = Some("No launchable programs found".to_owned());
    }

    ui::run(&mut app, &dirs, &mut log)?;
    log.event("session end");
    Ok(())
}
