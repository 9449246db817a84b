mod api;
mod cli;
mod command;
mod config;
mod error;
mod files;
mod transport;
mod utils;

type Result<T, E = anyhow::Error> = std::result::Result<T, E>;

fn main() -> Result<()> {
    let opt = cli::parse_args();

    match opt.command {
        Some(cli::Command::Get(get_args)) => command::get::execute(&opt.globals, &get_args)?,
        Some(cli::Command::Config) => command::config::execute(&opt.globals)?,
        None => command::create::execute(&opt.globals, opt.file)?,
    }

    Ok(())
}
