use dialoguer::Input;

use super::*;
use crate::utils::OptionExt;

pub fn execute(globals: &GlobalArgs) -> Result<()> {
    let server = globals.server.clone().ok_or_try(prompt)?;

    let path = config_file_path(globals);
    let mut config = HasteConfig::load_from(&path)?;
    config.apply_overrides(globals);
    config.set_server(&server);
    config.store_at(&path)?;

    println!("Configuration written to {}", path.display());

    Ok(())
}

fn prompt() -> Result<String> {
    let url = Input::new().with_prompt("Enter server URL").interact()?;

    Ok(url)
}
