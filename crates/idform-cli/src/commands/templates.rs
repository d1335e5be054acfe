//! Templates command - list and inspect form templates.

use clap::{Args, Subcommand};
use console::style;

use idform_core::TemplateRegistry;

/// Arguments for the templates command.
#[derive(Args)]
pub struct TemplatesArgs {
    #[command(subcommand)]
    command: TemplatesCommand,
}

#[derive(Subcommand)]
enum TemplatesCommand {
    /// List available templates
    List,

    /// Show the fields and links of one template
    Show {
        /// Template id (e.g., "pan")
        id: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(args: TemplatesArgs) -> anyhow::Result<()> {
    let registry = TemplateRegistry::builtin();
    match args.command {
        TemplatesCommand::List => list(&registry),
        TemplatesCommand::Show { id, json } => show(&registry, &id, json),
    }
}

fn list(registry: &TemplateRegistry) -> anyhow::Result<()> {
    for template in registry.iter() {
        println!(
            "{:<16} {} ({} fields)",
            style(template.id).bold(),
            template.title,
            template.required_fields.len()
        );
    }
    Ok(())
}

fn show(registry: &TemplateRegistry, id: &str, json: bool) -> anyhow::Result<()> {
    let template = registry.get(id).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown template: {}. Available: {}",
            id,
            registry.ids().join(", ")
        )
    })?;

    if json {
        println!("{}", serde_json::to_string_pretty(template)?);
        return Ok(());
    }

    println!("{} ({})", style(template.title).bold(), template.id);
    println!();
    println!("Fields:");
    for field in template.required_fields {
        println!("  {:<12} {}", field.key(), field.label());
    }
    if !template.related_links.is_empty() {
        println!();
        println!("Related links:");
        for link in template.related_links {
            let fillable = if link.is_fillable {
                style(" (fillable)").green().to_string()
            } else {
                String::new()
            };
            println!("  {}: {}{}", link.name, link.url, fillable);
        }
    }
    Ok(())
}
