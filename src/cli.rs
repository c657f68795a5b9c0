use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use usb_loader::{CommandSpec, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "usb-loader", version, about = "Disk inventory and mount service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Raise log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(flatten)]
    pub tools: ToolArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the HTTP API and web front-end (default)
    Serve(ServeArgs),

    /// Print the disk inventory as JSON and exit
    Disks,
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Listen address [default: 0.0.0.0:8080]
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<SocketAddr>,

    /// Directory with the web front-end [default: ./static]
    #[arg(long, value_name = "DIR")]
    pub static_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct ToolArgs {
    /// Disk listing program [default: fdisk]
    #[arg(long, global = true, value_name = "PROGRAM")]
    pub listing_command: Option<String>,

    /// Argument for the listing program, repeatable [default: -l]
    #[arg(long = "listing-arg", global = true, value_name = "ARG", allow_hyphen_values = true)]
    pub listing_args: Vec<String>,

    /// Directory creation program, invoked with -p [default: mkdir]
    #[arg(long, global = true, value_name = "PROGRAM")]
    pub mkdir_command: Option<String>,

    /// Mount program [default: mount]
    #[arg(long, global = true, value_name = "PROGRAM")]
    pub mount_command: Option<String>,
}

impl Cli {
    /// Defaults overlaid with whatever was given on the command line
    pub fn config(&self) -> ServerConfig {
        let mut config = ServerConfig::default();

        if let Some(Command::Serve(serve)) = &self.command {
            if let Some(addr) = serve.bind {
                config = config.with_bind_addr(addr);
            }
            if let Some(dir) = &serve.static_dir {
                config = config.with_static_dir(dir.clone());
            }
        }

        let tools = &self.tools;
        if tools.listing_command.is_some() || !tools.listing_args.is_empty() {
            let defaults = config.commands.listing.clone();
            let program = tools.listing_command.clone().unwrap_or(defaults.program);
            let args = if tools.listing_args.is_empty() {
                defaults.args
            } else {
                tools.listing_args.clone()
            };
            config = config.with_listing_command(CommandSpec::new(program).with_args(args));
        }
        if let Some(program) = &tools.mkdir_command {
            config = config.with_mkdir_command(CommandSpec::new(program.clone()).with_arg("-p"));
        }
        if let Some(program) = &tools.mount_command {
            config = config.with_mount_command(CommandSpec::new(program.clone()));
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_default_serve() {
        let cli = Cli::try_parse_from(["usb-loader"]).expect("parses");
        assert!(cli.command.is_none());

        let config = cli.config();
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.commands.listing.program, "fdisk");
    }

    #[test]
    fn serve_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "usb-loader",
            "serve",
            "--bind",
            "127.0.0.1:3000",
            "--static-dir",
            "/srv/usb-loader",
        ])
        .expect("parses");

        let config = cli.config();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.static_dir, PathBuf::from("/srv/usb-loader"));
    }

    #[test]
    fn listing_command_keeps_default_argument_unless_given() {
        let cli = Cli::try_parse_from(["usb-loader", "disks", "--listing-command", "sfdisk"])
            .expect("parses");
        assert_eq!(cli.config().commands.listing.args, vec!["-l".to_string()]);

        let cli = Cli::try_parse_from([
            "usb-loader",
            "disks",
            "--listing-command",
            "cat",
            "--listing-arg",
            "fdisk.txt",
        ])
        .expect("parses");
        let listing = cli.config().commands.listing;
        assert_eq!(listing.program, "cat");
        assert_eq!(listing.args, vec!["fdisk.txt".to_string()]);
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::try_parse_from(["usb-loader", "-vv", "disks"]).expect("parses");
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Command::Disks)));
    }
}
