use anyhow::{Context, Result};
use courseread::{
    Catalog, Cli, Command, Config, MAX_RATING, Progress, ProgressAction, ProgressArgs, RenderArgs,
    SearchArgs, TableOfContents,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Build(config) => build(&config),
        Command::Render(args) => render(&args),
        Command::Search(args) => search(&args),
        Command::Progress(args) => progress(&args),
    }
}

fn build(config: &Config) -> Result<()> {
    let summary = courseread::generate_site(config)?;

    if !config.no_open {
        if let Err(e) = open::that(&summary.index) {
            warn!("Failed to open {}: {}", summary.index.display(), e);
        }
    }

    Ok(())
}

fn render(args: &RenderArgs) -> Result<()> {
    let html = args.renderer().render_file(&args.file)?;

    if !args.toc {
        println!("{}", html);
        return Ok(());
    }

    let toc = TableOfContents::generate(&html);
    println!("{}", toc.html);
    for entry in &toc.entries {
        eprintln!(
            "{}{} {}",
            "  ".repeat(entry.indent() as usize),
            entry.href(),
            entry.text
        );
    }

    Ok(())
}

fn search(args: &SearchArgs) -> Result<()> {
    let catalog = Catalog::load(&args.catalog).context("Failed to load chapter catalog")?;
    let in_category = catalog.filter_by_category(args.category.as_deref());

    let matches: Vec<_> = catalog
        .search(&args.term)
        .into_iter()
        .filter(|meta| in_category.iter().any(|m| m.id == meta.id))
        .collect();

    if matches.is_empty() {
        println!("No chapters match \"{}\"", args.term);
        return Ok(());
    }

    for meta in matches {
        println!(
            "{:>3}  {}  [{}, {}, {}]",
            meta.id, meta.title, meta.category, meta.difficulty, meta.duration
        );
    }

    Ok(())
}

fn progress(args: &ProgressArgs) -> Result<()> {
    let mut progress = Progress::load(&args.progress)?;

    match args.action {
        ProgressAction::Complete { id } => {
            let state = if progress.toggle_completed(id) {
                "completed"
            } else {
                "not completed"
            };
            println!("Chapter {} marked {}", id, state);
        }
        ProgressAction::Bookmark { id } => {
            let state = if progress.toggle_bookmark(id) {
                "bookmarked"
            } else {
                "removed from bookmarks"
            };
            println!("Chapter {} {}", id, state);
        }
        ProgressAction::Rate { id, stars } => {
            progress.rate(id, stars)?;
            println!("Chapter {} rated {} of {} stars", id, stars, MAX_RATING);
        }
        ProgressAction::Show => {
            println!("Completed: {}", join(progress.completed()));
            println!("Bookmarked: {}", join(progress.bookmarks()));
            let ratings: Vec<String> = progress
                .ratings()
                .map(|(id, stars)| format!("{}={}", id, stars))
                .collect();
            println!("Ratings: {}", ratings.join(", "));
            return Ok(());
        }
    }

    progress.save(&args.progress)
}

fn join(ids: impl Iterator<Item = u32>) -> String {
    ids.map(|id| id.to_string()).collect::<Vec<_>>().join(", ")
}
