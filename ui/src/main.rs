#![warn(clippy::all, rust_2018_idioms)]

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context as _;
    use hrms_ui::HostConfig;
    use hrms_ui::dom::MemoryDocument;

    // Log to stderr (if you run with `RUST_LOG=debug`); stdout carries the rendered HTML.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let host = HostConfig::from_env().context("failed to load configuration")?;
    let container_id = host.ui.container_id.clone();

    let mut document = MemoryDocument::with_container(&container_id);
    let state = hrms_ui::run_user_list(&host.ui, host.cookie_store(), &mut document).await?;
    log::debug!("Finished in state {state:?}");

    let container = document
        .container(&container_id)
        .with_context(|| format!("container `{container_id}` disappeared"))?;
    println!("{}", container.to_html());

    Ok(())
}

// The browser build enters through `hrms_ui::web::start`.
#[cfg(target_arch = "wasm32")]
fn main() {}
