use std::io::Write;

use super::*;
use crate::api;
use crate::cli::GetArgs;
use crate::files::{self, OsFileSystem};
use crate::transport::ReqwestTransport;
use crate::utils;

pub fn execute(globals: &GlobalArgs, args: &GetArgs) -> Result<()> {
    let mut config = load_configuration(globals)?;

    // A full haste URL overrides the configured server; anything else is
    // taken verbatim as a key.
    let key = match utils::parse_haste_url(&args.key) {
        Some((server, key)) => {
            config.set_server(&server);
            key
        }
        None => args.key.clone(),
    };

    let fs = OsFileSystem;
    let transport = ReqwestTransport::from_config(&fs, &config)?;
    let haste = api::get_haste(&transport, &config.server, &key)?;

    let mut output = files::setup_output(args.out.as_deref(), &fs, std::io::stdout())?;
    output.write_all(haste.as_bytes())?;
    if args.out.is_none() && !haste.ends_with('\n') {
        output.write_all(b"\n")?;
    }
    output.flush()?;

    Ok(())
}
