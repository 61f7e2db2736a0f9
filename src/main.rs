//! CLI entry point for blog-render

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blog-render")]
#[command(version)]
#[command(about = "Renders blog post lists and post pages from pre-rendered content", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Address of the post (defaults to the slugified file name)
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate,

    /// Print the rendered view of one post
    Show {
        /// Slug of the post
        slug: String,

        /// Print HTML instead of JSON
        #[arg(long)]
        html: bool,
    },

    /// Remove the public folder
    Clean,

    /// List site information
    List {
        /// Type of content to list (post, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blog_render=debug,info"
    } else {
        "blog_render=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::New { title, slug } => {
            let blog = blog_render::Blog::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            let path = blog_render::commands::new::create_post(&blog, &title, slug.as_deref())?;
            println!("Created: {:?}", path);
        }

        Commands::Generate => {
            let blog = blog_render::Blog::new(&base_dir)?;
            tracing::info!("Generating static files...");
            blog.generate()?;
            println!("Generated successfully!");
        }

        Commands::Show { slug, html } => {
            let blog = blog_render::Blog::new(&base_dir)?;
            blog_render::commands::show::run(&blog, &slug, html)?;
        }

        Commands::Clean => {
            let blog = blog_render::Blog::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            blog.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let blog = blog_render::Blog::new(&base_dir)?;
            blog_render::commands::list::run(&blog, &r#type)?;
        }

        Commands::Version => {
            println!("blog-render version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
