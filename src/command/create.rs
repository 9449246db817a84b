use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;

use super::*;
use crate::api;
use crate::files::{self, OsFileSystem};
use crate::transport::ReqwestTransport;

pub fn execute(globals: &GlobalArgs, file: Option<PathBuf>) -> Result<()> {
    let config = load_configuration(globals)?;

    let fs = OsFileSystem;
    let mut input = files::setup_input(file.as_deref(), &fs, std::io::stdin())?;

    let mut content = Vec::new();
    input
        .read_to_end(&mut content)
        .context("Error reading input")?;

    let transport = ReqwestTransport::from_config(&fs, &config)?;
    let key = api::create_haste(&transport, &config.server, content)?;

    println!("{}/{}", config.server, key);

    Ok(())
}
