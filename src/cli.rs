use std::path::PathBuf;

use structopt::StructOpt;

pub fn parse_args() -> Opt {
    Opt::from_args()
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "haste",
    about = "A hastebin client that can create hastes from files and STDIN \
             and read hastes from a configurable server"
)]
pub struct Opt {
    #[structopt(flatten)]
    pub globals: GlobalArgs,

    /// File to create a haste from; STDIN is read when omitted
    #[structopt(parse(from_os_str))]
    pub file: Option<PathBuf>,

    #[structopt(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, StructOpt)]
pub struct GlobalArgs {
    /// Config file [default: $CONFIG_DIR/haste-client.json]
    #[structopt(
        short = "c",
        long = "config",
        global = true,
        env = "HASTE_CONFIG",
        parse(from_os_str)
    )]
    pub config_file: Option<PathBuf>,

    /// Server URL
    #[structopt(short = "s", long, global = true, env = "HASTE_SERVER")]
    pub server: Option<String>,

    /// Client certificate path (PEM)
    #[structopt(long, global = true, env = "HASTE_CLIENT_CERT", parse(from_os_str))]
    pub client_cert: Option<PathBuf>,

    /// Client certificate key path (PEM)
    #[structopt(long, global = true, env = "HASTE_CLIENT_CERT_KEY", parse(from_os_str))]
    pub client_cert_key: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Gets a haste from the server by key or full URL
    Get(GetArgs),
    /// Stores the effective server and certificate settings in the config file
    Config,
}

#[derive(Debug, StructOpt)]
pub struct GetArgs {
    /// Haste key or a full haste URL (protocol required)
    pub key: String,

    /// File path to save the haste instead of printing it
    #[structopt(short = "o", long, parse(from_os_str))]
    pub out: Option<PathBuf>,
}
