use image::Rgb32FImage;
use rayon::prelude::{ParallelBridge, ParallelIterator};

use crate::{
    aggregate::ShapeList,
    camera::Camera,
    color::{Color, Vec3AsRgbExt},
    integrators::{ColorResolver, Integrator},
    progress::Progress,
};

#[derive(Debug, Clone, Default)]
pub struct RendererOptions {
    /// Print a progress bar on stderr while rendering
    pub show_progress: bool,
}

pub struct Renderer {
    pub camera: Camera,
    pub world: ShapeList,
    pub integrator: Box<dyn Integrator>,
    pub options: RendererOptions,
}

impl Renderer {
    pub fn new(camera: Camera, world: ShapeList) -> Self {
        Self {
            camera,
            world,
            integrator: Box::new(ColorResolver::default()),
            options: RendererOptions::default(),
        }
    }

    /// Color of pixel `(i, j)`, `j` counted from the bottom row
    pub fn process_pixel(&self, i: u32, j: u32) -> Color {
        let ray = self.camera.pixel_ray(i, j);
        self.integrator.ray_color(&ray, &self.world)
    }

    /// Renders every pixel; row 0 of the returned image is the top of the picture.
    ///
    /// Rows are shaded in parallel.
    pub fn run(&self) -> Rgb32FImage {
        let (width, height) = (self.camera.width, self.camera.height);
        let mut image = Rgb32FImage::new(width, height);
        if width == 0 || height == 0 {
            log::warn!("Empty {width}x{height} image, nothing to render");
            return image;
        }

        let progress = Progress::new(width as usize * height as usize);
        log::info!(
            "Generating {width}x{height} image with {} spheres on {} threads...",
            self.world.len(),
            rayon::current_num_threads()
        );

        // Not a rayon job: with a single worker it would never let the rows run
        std::thread::scope(|s| {
            if self.options.show_progress {
                s.spawn(|| {
                    while !progress.done() {
                        std::thread::sleep(std::time::Duration::from_millis(100));
                        progress.print();
                    }
                    progress.print();
                    eprintln!();
                });
            }

            // pixels in the image crate are from left to right, top to bottom
            image
                .rows_mut()
                .enumerate()
                .par_bridge()
                .for_each(|(y, row)| {
                    let j = height - 1 - y as u32;
                    for (i, pixel) in row.enumerate() {
                        *pixel = self.process_pixel(i as u32, j).rgb();
                    }
                    progress.add(width as usize);
                });
        });

        image
    }
}
