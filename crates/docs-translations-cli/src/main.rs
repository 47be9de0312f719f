use clap::error::ErrorKind;
use clap::{CommandFactory as _, Parser};
use docs_translations_cli::commands::{
    ConfigArgs, Operation, RobotsArgs, SelectionArgs, run_fetch, run_robots_txt,
};
use docs_translations_cli::utils::ui;
use miette::Result as MietteResult;

#[derive(Parser)]
#[command(name = "manage-translations")]
#[command(about = "Manage the documentation translations checkout")]
#[command(version)]
struct Cli {
    /// Operation to run
    #[arg(value_enum)]
    operation: Operation,

    #[command(flatten)]
    selection: SelectionArgs,

    #[command(flatten)]
    robots: RobotsArgs,

    #[command(flatten)]
    config: ConfigArgs,

    /// Log every external command that is run
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> MietteResult<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .wrap_lines(false)
                .build(),
        )
    }))
    .ok();

    let cli = Cli::parse();

    if cli.operation == Operation::Fetch && cli.robots.branch.is_some() {
        Cli::command()
            .error(
                ErrorKind::ArgumentConflict,
                "--branch only applies to the robots_txt operation",
            )
            .exit();
    }

    ui::init_logging(cli.verbose);

    let result = match cli.operation {
        Operation::Fetch => run_fetch(cli.selection, cli.config),
        Operation::RobotsTxt => run_robots_txt(cli.selection, cli.robots, cli.config),
    };

    result.map_err(miette::Report::new)
}
