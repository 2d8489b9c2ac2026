use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "tablepatch",
    version,
    about = "literature-review table regenerator",
    long_about = "Tablepatch regenerates the article table of a static review page from a JSON data file, refreshes the page's summary counters, and prints grouped article statistics.\n\nExamples:\n  tablepatch\n  tablepatch update --data data/artigos_reais.json --html index.html\n  tablepatch report\n  tablepatch serve 8080\n\nTip: Use --config to persist paths and keep CLI invocations short."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[arg(
        short = 'C',
        long = "cfg",
        visible_alias = "config",
        value_name = "FILE",
        global = true,
        help_heading = "Input",
        help = "Path to config file (defaults to ~/.tablepatch/config.yml)."
    )]
    pub config: Option<String>,

    #[arg(
        short = 'n',
        long = "nc",
        visible_alias = "no-color",
        global = true,
        help_heading = "Output",
        help = "Disable colored output."
    )]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(about = "Regenerate the table and counters, then print the report (default)")]
    Update {
        #[arg(
            short = 'd',
            long = "data",
            value_name = "FILE",
            help_heading = "Input",
            help = "Article store JSON file (defaults to data/artigos_reais.json)."
        )]
        data: Option<String>,

        #[arg(
            long = "html",
            value_name = "FILE",
            help_heading = "Input",
            help = "HTML document to patch in place (defaults to index.html)."
        )]
        html: Option<String>,
    },

    #[command(about = "Print grouped article statistics without touching any file")]
    Report {
        #[arg(
            short = 'd',
            long = "data",
            value_name = "FILE",
            help_heading = "Input",
            help = "Article store JSON file (defaults to data/artigos_reais.json)."
        )]
        data: Option<String>,
    },

    #[command(about = "Serve the current directory over HTTP and open a browser")]
    Serve {
        #[arg(value_name = "PORT", help = "TCP port to bind (defaults to 8000).")]
        port: Option<u16>,

        #[arg(
            long = "nb",
            visible_alias = "no-browser",
            help = "Do not open a browser tab."
        )]
        no_browser: bool,
    },
}
