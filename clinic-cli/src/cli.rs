use clap::Parser;
use clap::Subcommand;

#[derive(Debug, Parser)]
#[command(name = "clinic", about = "Clinic administration from the terminal")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the staff list one page at a time.
    Staff {
        /// 1-based page to show; out-of-range pages show the nearest one.
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Rows per page (overrides CLINIC_PAGE_SIZE).
        #[arg(long)]
        page_size: Option<usize>,

        /// Tick the master checkbox before applying --toggle.
        #[arg(long)]
        select_all: bool,

        /// 1-based row numbers whose checkbox to flip.
        #[arg(long, num_args = 1..)]
        toggle: Vec<usize>,
    },

    /// Create an account through the authentication API.
    Register {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Base URL of the auth API (overrides CLINIC_AUTH_URL).
        #[arg(long)]
        url: Option<String>,
    },
}
