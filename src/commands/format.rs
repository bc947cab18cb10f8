//! Implementation of the `format`, `inspect` and `templates` commands.

use super::load_config;
use crate::cli::{FormatArgs, InspectArgs};
use crate::context::AppContext;
use crate::error::Result;
use crate::template::{FormatValues, PostTemplate, TemplateRegistry};

/// Execute the `docketpost format` command.
///
/// Prints the formatted post exactly as it would be published.
pub fn cmd_format(ctx: &AppContext, args: FormatArgs) -> Result<()> {
    let registry = load_config(ctx)?.template_registry()?;
    println!("{}", format_post(&registry, &args)?);
    Ok(())
}

/// Execute the `docketpost inspect` command.
pub fn cmd_inspect(ctx: &AppContext, args: InspectArgs) -> Result<()> {
    let registry = load_config(ctx)?.template_registry()?;
    let template = registry.get(&args.template)?;
    print!("{}", describe_template(&args.template, template));
    Ok(())
}

/// Execute the `docketpost templates` command.
pub fn cmd_templates(ctx: &AppContext) -> Result<()> {
    let registry = load_config(ctx)?.template_registry()?;

    for (name, template) in registry.iter() {
        println!(
            "{:<12} {:>4} chars  {}",
            name,
            template.max_characters(),
            template.placeholders().collect::<Vec<_>>().join(", ")
        );
    }

    Ok(())
}

fn format_post(registry: &TemplateRegistry, args: &FormatArgs) -> Result<String> {
    let template = registry.get(&args.template)?;
    let values: FormatValues = args.values.iter().cloned().collect();
    Ok(template.format(&values)?)
}

fn describe_template(name: &str, template: &PostTemplate) -> String {
    let links = if template.link_placeholders().is_empty() {
        "(none)".to_string()
    } else {
        template.link_placeholders().join(", ")
    };

    format!(
        "Template:       {}\n\
         Placeholders:   {}\n\
         Links:          {}\n\
         Truncatable:    {}\n\
         Max characters: {}\n\
         Fixed:          {}\n\
         Effective:      {}\n\
         \n\
         {}\n",
        name,
        template.placeholders().collect::<Vec<_>>().join(", "),
        links,
        template.truncatable(),
        template.max_characters(),
        template.fixed_characters(),
        template.effective_length(),
        template.skeleton()
    )
}
