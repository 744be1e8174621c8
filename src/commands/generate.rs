use std::io::Write;

use anyhow::Context;

use crate::{
    GenerateArgs,
    build::{ErrorKind, Generator, SitemapError},
    config::{ConfigOverrides, SitemapConfig},
};

pub fn run(args: &GenerateArgs) -> Result<(), anyhow::Error> {
    let config = SitemapConfig::load_from_arg(args.config_file.as_deref())
        .context("failed to load configuration")?;

    let settings = config.into_settings(ConfigOverrides {
        publish_dir: args.publish_dir.clone(),
        base_url: args.base_url.clone(),
        rules: args.rules.clone(),
    })?;

    let generator = Generator::new(settings);

    if args.dry_run {
        let (prepared, xml) = generator.preview().map_err(describe)?;
        std::io::stdout().write_all(&xml)?;
        tracing::info!(
            "Dry run: would write {} URL(s) to {}",
            prepared.document.len(),
            prepared.output_path.display()
        );
        return Ok(());
    }

    let result = generator.generate().map_err(describe)?;

    println!(
        "Wrote {} ({} URL(s) from {} HTML file(s))",
        result.output_path.display(),
        result.urls,
        result.html_files
    );

    Ok(())
}

/// Label a generation failure by kind; `main` reports it once.
fn describe(err: SitemapError) -> anyhow::Error {
    let context = match err.kind() {
        ErrorKind::Configuration => "invalid sitemap input",
        ErrorKind::Io => "sitemap generation failed",
    };
    anyhow::Error::new(err).context(context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_labels_configuration_errors() {
        let err = describe(SitemapError::EmptyPublishDir);
        assert_eq!(
            format!("{err:#}"),
            "invalid sitemap input: publish directory must not be empty"
        );
    }

    #[test]
    fn test_describe_labels_io_errors() {
        let err = describe(SitemapError::Serialize(std::io::Error::other("disk full")));
        assert_eq!(err.to_string(), "sitemap generation failed");
        assert!(err.downcast_ref::<SitemapError>().is_some());
    }
}
