use anyhow::{Context, Result};
use raycast::{
    aggregate::ShapeList,
    camera::Camera,
    integrators::ColorResolver,
    output::{self, OutputFormat},
    renderer::{Renderer, RendererOptions},
    scene::SceneKind,
    utils::timer::timed_scope_log,
};

use crate::Args;

pub struct Cli {
    pub renderer: Renderer,
    pub output: std::path::PathBuf,
}

impl Cli {
    pub fn new(args: Args) -> Result<Self> {
        // Fail before rendering rather than after
        OutputFormat::from_path(&args.output)?;

        if args.no_threads {
            log::warn!("Working on only one thread");
            rayon::ThreadPoolBuilder::new()
                .num_threads(1)
                .build_global()
                .context("Could not build the single thread pool")?;
        }

        let scene: SceneKind = args.scene.into();
        log::info!("Scene: {scene:?}, {}", args.dimensions);

        let mut renderer = Renderer::new(
            Camera::tutorial(args.dimensions.width, args.dimensions.height),
            ShapeList::from(scene),
        );
        renderer.integrator = Box::new(ColorResolver {
            shading: args.shading.into(),
            ..Default::default()
        });
        renderer.options = RendererOptions {
            show_progress: !args.no_progress,
        };

        Ok(Self {
            renderer,
            output: args.output,
        })
    }

    pub fn run(self) -> Result<()> {
        let image = timed_scope_log("Render", || self.renderer.run());
        output::save(&image, &self.output)
            .with_context(|| format!("Could not write {}", self.output.display()))?;
        Ok(())
    }
}
