mod cli;

use std::{fmt::Display, path::PathBuf};

use clap::{Parser, ValueEnum};
use cli::Cli;
use raycast::{integrators::ShadingMode, scene::SceneKind};

#[derive(Debug, Default, Clone, Copy, ValueEnum)]
pub enum AvailableScene {
    /// Background gradient only
    Sky,
    /// One sphere
    #[default]
    Sphere,
    /// One sphere on the ground
    Ground,
}

impl From<AvailableScene> for SceneKind {
    fn from(scene: AvailableScene) -> Self {
        match scene {
            AvailableScene::Sky => SceneKind::Sky,
            AvailableScene::Sphere => SceneKind::Sphere,
            AvailableScene::Ground => SceneKind::Ground,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, ValueEnum)]
pub enum AvailableShading {
    #[default]
    Flat,
    Normal,
}

impl From<AvailableShading> for ShadingMode {
    fn from(shading: AvailableShading) -> Self {
        match shading {
            AvailableShading::Flat => ShadingMode::Flat,
            AvailableShading::Normal => ShadingMode::Normal,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl std::str::FromStr for Dimensions {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((a, b)) = s.split_once('x') else {
            return Err(anyhow::anyhow!("Incorrect format, expected `width`x`height`"));
        };
        let width: u32 = a.trim().parse()?;
        let height: u32 = b.trim().parse()?;
        if width == 0 || height == 0 {
            anyhow::bail!("Dimensions must be non zero, got {width}x{height}");
        }

        Ok(Dimensions { width, height })
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Parser, Debug)]
#[command(about = "Casts rays at spheres and writes the picture as PPM or PNG")]
pub struct Args {
    #[arg(short, long, default_value = "200x100")]
    /// Image dimension in format `width`x`height`
    dimensions: Dimensions,

    #[arg(long, value_enum, default_value_t)]
    /// Scene selector
    scene: AvailableScene,

    #[arg(long, value_enum, default_value_t)]
    /// How hits are colored
    shading: AvailableShading,

    #[arg(short, long, default_value = "out.ppm")]
    /// Output file, `.ppm` or `.png`
    output: PathBuf,

    #[arg(long)]
    /// Render on a single thread
    no_threads: bool,

    #[arg(long)]
    /// Do not print the progress bar
    no_progress: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    Cli::new(args)?.run()
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Args, Dimensions};

    #[test]
    fn parse_dimensions() {
        assert_eq!(
            "640x480".parse::<Dimensions>().unwrap(),
            Dimensions {
                width: 640,
                height: 480
            }
        );
        assert!("640".parse::<Dimensions>().is_err());
        assert!("640x".parse::<Dimensions>().is_err());
        assert!("0x480".parse::<Dimensions>().is_err());
        assert!("ax480".parse::<Dimensions>().is_err());
        assert_eq!(
            Dimensions {
                width: 20,
                height: 10
            }
            .to_string(),
            "20x10"
        );
    }

    #[test]
    fn default_args() {
        let args = Args::try_parse_from(["raycast"]).unwrap();
        assert_eq!(args.dimensions.to_string(), "200x100");
        assert_eq!(args.output.to_str(), Some("out.ppm"));
        assert!(!args.no_threads);

        let args =
            Args::try_parse_from(["raycast", "-d", "4x2", "--scene", "ground", "-o", "a.png"])
                .unwrap();
        assert_eq!(args.dimensions.to_string(), "4x2");
        assert!(Args::try_parse_from(["raycast", "--shading", "shiny"]).is_err());
    }
}
