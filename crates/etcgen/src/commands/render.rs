//! Render command handler.

use etcgen_core::{EtcRenderer, SnapshotSource, WSDD_LOG_GID, WSDD_LOG_UID};

use crate::cli::{GlobalOpts, RenderArgs, RenderTarget};
use crate::config::{self, Config};
use crate::error::CliError;

pub fn handle(args: RenderArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let cfg = config::load_config(global)?;

    let source = SnapshotSource::load(&cfg.snapshot)
        .map_err(|source| CliError::Retrieval { source })?;
    let renderer = EtcRenderer::new(source);

    match args.target {
        RenderTarget::Hosts => render_hosts(&renderer, &cfg, args.stdout, global),
        RenderTarget::Wsdd => render_wsdd(&renderer, &cfg, args.stdout, global),
        RenderTarget::All => {
            render_hosts(&renderer, &cfg, args.stdout, global)?;
            render_wsdd(&renderer, &cfg, args.stdout, global)
        }
    }
}

fn render_hosts(
    renderer: &EtcRenderer<SnapshotSource>,
    cfg: &Config,
    stdout: bool,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if stdout {
        print!("{}", renderer.hosts_file()?);
        return Ok(());
    }

    renderer.write_hosts(&cfg.hosts_path)?;
    if !global.quiet {
        println!("wrote {}", cfg.hosts_path.display());
    }
    Ok(())
}

fn render_wsdd(
    renderer: &EtcRenderer<SnapshotSource>,
    cfg: &Config,
    stdout: bool,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if stdout {
        let descriptor = renderer.wsdd_descriptor()?;
        let json = descriptor
            .to_json()
            .map_err(|source| CliError::Serialize { source })?;
        print!("{json}");
        return Ok(());
    }

    renderer.write_wsdd(&cfg.wsdd_path, &cfg.wsdd_log_path, WSDD_LOG_UID, WSDD_LOG_GID)?;
    if !global.quiet {
        println!("wrote {}", cfg.wsdd_path.display());
    }
    Ok(())
}
