use std::io;

use crate::{error::Result, session::Session};

mod error;
mod session;
mod settings;

fn main() -> Result<()> {
    let settings = settings::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "expenses={level},engine={level}",
            level = settings.level
        ))
        .with_writer(io::stderr)
        .init();

    tracing::debug!("using data file {}", settings.data_file.display());

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut session = Session::open(stdin, stdout, settings.data_file)?;
    session.run()
}
