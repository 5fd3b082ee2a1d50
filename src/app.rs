//! Command-line surface and dispatch.
//!
//! Arguments are parsed once into an immutable [`Options`] value per
//! invocation; nothing downstream mutates or re-reads them.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Options;
use crate::error::Result;
use crate::pipeline;
use crate::secret::Passphrase;
use crate::ui::display;

#[derive(Parser)]
#[command(
    name = "cryptar",
    version,
    about = "Encrypt a directory into a single password-protected file, decrypt it back, and securely erase files and directories."
)]
pub struct App {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypts a directory into a file, and optionally securely erases the source.
    Encrypt {
        /// Directory to encrypt.
        path: PathBuf,

        /// The password protecting the archive.
        #[arg(short, long)]
        password: String,

        /// Skip interactive confirmations (answers yes).
        #[arg(short = 'y', long)]
        non_interactive: bool,

        /// Securely erase the source directory after encryption.
        #[arg(short, long)]
        erase_source: bool,
    },

    /// Decrypts a .ctar file back into the original directory.
    Decrypt {
        /// Ciphertext file to decrypt.
        path: PathBuf,

        /// The password protecting the archive.
        #[arg(short, long)]
        password: String,

        /// Skip interactive confirmations (answers yes).
        #[arg(short = 'y', long)]
        non_interactive: bool,

        /// Securely erase the .ctar file after decryption.
        #[arg(short, long)]
        erase_source: bool,
    },

    /// Securely erases a file or a directory tree.
    Wipe {
        /// File or directory to erase.
        path: PathBuf,

        /// Skip the confirmation prompt.
        #[arg(short = 'y', long)]
        non_interactive: bool,
    },
}

impl App {
    /// Initializes logging and parses the command line.
    pub fn init() -> Self {
        let subscriber = tracing_subscriber::fmt().with_target(false).finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        Self::parse()
    }

    /// Runs the selected command to completion.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Encrypt { path, password, non_interactive, erase_source } => {
                let opts = Options {
                    passphrase: Passphrase::from_string(password),
                    non_interactive,
                    erase_source,
                };
                pipeline::encrypt(&path, &opts)?;
                display::show_success("Encrypted", &path);
            }

            Commands::Decrypt { path, password, non_interactive, erase_source } => {
                let opts = Options {
                    passphrase: Passphrase::from_string(password),
                    non_interactive,
                    erase_source,
                };
                pipeline::decrypt(&path, &opts)?;
                display::show_success("Decrypted", &path);
            }

            Commands::Wipe { path, non_interactive } => {
                if pipeline::wipe(&path, non_interactive)? {
                    display::show_success("Wiped", &path);
                } else {
                    println!("aborted, nothing was touched");
                }
            }
        }

        Ok(())
    }
}
