use crate::{
    InitArgs,
    config::{DEFAULT_CONFIG_FILE, RuleSpec, SitemapConfig},
};

pub fn run(args: &InitArgs) -> Result<(), anyhow::Error> {
    let path = if args.path.is_relative() {
        std::env::current_dir()?.join(&args.path)
    } else {
        args.path.clone()
    };

    if !path.exists() {
        if args.create {
            std::fs::create_dir_all(&path)?;
            println!("Created directory {path}", path = path.display());
        } else {
            return Err(anyhow::anyhow!(
                "Directory does not exist: {path}",
                path = path.display()
            ));
        }
    }

    let config_file = path.join(DEFAULT_CONFIG_FILE);
    if config_file.exists() {
        return Err(anyhow::anyhow!(
            "Config file already exists: {config_file}",
            config_file = config_file.display()
        ));
    }

    println!("Initializing sitemap config in {}", path.display());

    let config_text = serde_yaml::to_string(&starter_config())?;
    std::fs::write(&config_file, config_text)?;

    println!(
        "Created config file {config_file}",
        config_file = config_file.display()
    );

    Ok(())
}

fn starter_config() -> SitemapConfig {
    SitemapConfig {
        publish_dir: Some("_site".into()),
        base_url: Some("https://my-site.com".into()),
        rules: vec![
            RuleSpec::new("/blog")
                .with_priority("0.8")
                .with_changefreq("weekly"),
        ],
    }
}
