//! Command-line interface for owsmodel

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
use owsmodel::metadata::{ClassDescriptor, FeatureDescriptor, FeatureKind};
#[cfg(feature = "cli")]
use owsmodel::ows11;

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "owsmodel")]
#[command(author, version, about = "Inspect the OWS 1.1 object model", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand, Debug)]
enum Commands {
    /// List every class of the registry
    Classes {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the feature table of one class
    Inspect {
        /// Class name, e.g. BoundingBoxType
        #[arg(value_name = "CLASS")]
        class: String,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },
}

#[cfg(feature = "cli")]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Classes { json } => cmd_classes(json),
        Commands::Inspect { class, json } => cmd_inspect(&class, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn cmd_classes(json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let registry = ows11::package();

    if json_output {
        use serde_json::json;

        let classes: Vec<_> = registry
            .classes()
            .map(|c| {
                json!({
                    "name": c.name,
                    "xmlName": c.xml_name,
                    "supertype": c.supertype,
                    "features": c.feature_count(),
                })
            })
            .collect();
        let output = json!({
            "namespace": registry.namespace(),
            "version": owsmodel::VERSION,
            "classes": classes,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("owsmodel {}", owsmodel::VERSION);
    println!("Namespace: {}", registry.namespace());
    println!("Classes: {}", registry.len());
    println!();
    for class in registry.classes() {
        match class.supertype {
            Some(supertype) => println!("  {} : {} ({})", class.name, supertype, class.feature_count()),
            None => println!("  {} ({})", class.name, class.feature_count()),
        }
    }
    Ok(())
}

#[cfg(feature = "cli")]
fn cmd_inspect(name: &str, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let class = ows11::package().require(name)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(class)?);
        return Ok(());
    }

    print_class(class);
    Ok(())
}

#[cfg(feature = "cli")]
fn print_class(class: &ClassDescriptor) {
    println!("=== {} ===", class.name);
    println!("XML type: {}", class.xml_name);
    println!("Content: {:?}", class.content);
    if let Some((_, supertypes)) = class.ancestors().split_first() {
        if !supertypes.is_empty() {
            println!("Extends: {}", supertypes.join(" > "));
        }
    }
    println!();

    if class.features().is_empty() {
        println!("  (no features)");
        return;
    }
    for feature in class.features() {
        println!(
            "  {:>2}  {:<28} {:<10} {}",
            feature.id,
            feature.name,
            feature.occurs.to_string(),
            feature_kind(class, feature)
        );
    }
}

#[cfg(feature = "cli")]
fn feature_kind(class: &ClassDescriptor, feature: &FeatureDescriptor) -> String {
    let kind = match feature.kind {
        FeatureKind::Attribute { data_type } => data_type.name().to_string(),
        FeatureKind::Containment { target: Some(target) } => format!("-> {}", target),
        FeatureKind::Containment { target: None } => "-> any".to_string(),
        FeatureKind::Group => "group".to_string(),
    };
    let mut notes = Vec::new();
    if let Some(group) = feature.group.and_then(|g| class.feature(g).ok()) {
        notes.push(format!("in {}", group.name));
    }
    if feature.xml.is_none() {
        notes.push("transient".to_string());
    }
    if let Some(default) = feature.default {
        notes.push(format!("default {}", default));
    }
    if notes.is_empty() {
        kind
    } else {
        format!("{} [{}]", kind, notes.join(", "))
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Rebuild with --features cli");
    std::process::exit(1);
}
