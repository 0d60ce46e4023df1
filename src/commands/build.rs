use crate::{
    BuildArgs,
    build::{Builder, base_path_from_config},
    config::Config,
};

pub async fn run(args: &BuildArgs) -> Result<(), anyhow::Error> {
    // Determine the config file path
    let config_path = args
        .config_file
        .clone()
        .unwrap_or_else(|| "mordechai.yaml".into());
    let config_path = if config_path.is_relative() {
        std::env::current_dir()?.join(&config_path)
    } else {
        config_path
    };

    let config = Config::load_from_arg(Some(config_path.as_path())).await?;

    // Relative content/output paths resolve against the config file's directory
    let base_path = base_path_from_config(&config_path);

    println!("Building {}...\n", config.site.name);

    let builder = Builder::new(config, base_path);
    let result = builder.build().await?;

    println!(
        "\nBuild complete: {} ({} documents, {} static files)",
        result.output_dir.display(),
        result.documents,
        result.static_files
    );

    Ok(())
}
