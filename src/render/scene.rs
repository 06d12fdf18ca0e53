use crate::{
    domain::palette::ColorScheme,
    error::ParamError,
    render::{
        clouds::{Cloud, composite_clouds},
        frame::FrameContext,
        layer::Layer,
        sky::fill_sky_gradient,
    },
    terrain::{
        layout::default_specs,
        mountain::{Mountain, MountainSpec},
    },
};

/// Ordered ridges, auxiliary layers and the color scheme they are painted with.
///
/// Paint order is sky, layers (insertion order), mountains (back to front), clouds.
#[derive(Debug, Default)]
pub struct Scene {
    scheme: ColorScheme,
    mountains: Vec<Mountain>,
    layers: Vec<Box<dyn Layer>>,
}

impl Scene {
    #[must_use]
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme,
            mountains: Vec::new(),
            layers: Vec::new(),
        }
    }

    /// Gray-ramp scene with `count` ridges generated for `width` columns.
    pub fn with_default_mountains(width: usize, count: usize) -> Result<Self, ParamError> {
        let mut scene = Self::new(ColorScheme::default());
        scene.set_mountains(default_specs(count, width))?;
        Ok(scene)
    }

    #[must_use]
    pub fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }

    pub fn set_scheme(&mut self, scheme: ColorScheme) {
        self.scheme = scheme;
    }

    #[must_use]
    pub fn mountains(&self) -> &[Mountain] {
        &self.mountains
    }

    /// Validates and appends a ridge in front of the existing ones.
    pub fn add_mountain(&mut self, spec: MountainSpec) -> Result<(), ParamError> {
        self.mountains.push(Mountain::new(spec)?);
        Ok(())
    }

    /// Replaces every ridge. Nothing changes if any spec is invalid.
    pub fn set_mountains(&mut self, specs: Vec<MountainSpec>) -> Result<(), ParamError> {
        let mountains = specs
            .into_iter()
            .map(Mountain::new)
            .collect::<Result<Vec<_>, _>>()?;
        self.mountains = mountains;
        Ok(())
    }

    pub fn clear_mountains(&mut self) {
        self.mountains.clear();
    }

    /// Regenerates every ridge in place with a seed drawn from `next_seed`.
    pub fn reseed_mountains(&mut self, mut next_seed: impl FnMut() -> u32) {
        for mountain in &mut self.mountains {
            mountain.regenerate(next_seed());
        }
    }

    pub fn add_layer(&mut self, layer: Box<dyn Layer>) {
        self.layers.push(layer);
    }

    pub fn clear_layers(&mut self) {
        self.layers.clear();
    }

    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn advance(&mut self, dt: f64) {
        for layer in &mut self.layers {
            layer.advance(dt);
        }
    }

    pub fn render(&self, ctx: &mut FrameContext<'_>, clouds: &[Cloud]) {
        if !ctx.is_paintable() {
            return;
        }
        fill_sky_gradient(ctx, self.scheme.sky_top, self.scheme.sky_bottom);
        for layer in &self.layers {
            layer.paint(ctx);
        }
        for mountain in &self.mountains {
            mountain.paint(ctx);
        }
        composite_clouds(ctx, clouds, self.scheme.cloud);
    }
}
