use std::time::Instant;

use anyhow::Result;
use crossterm::event::Event;
use tokio::sync::mpsc;

use crate::{
    app::{
        events::{AppEvent, start_frame_task},
        intent::{Intent, intent_for_key},
    },
    cli::{Cli, LayoutArg},
    config::SceneConfig,
    domain::palette::Palette,
    render::{clouds::CloudField, frame::Framebuffer, layer::SunLayer, scene::Scene},
    terrain::{
        layout::{default_specs, random_specs},
        sequence::SequenceGenerator,
    },
    ui::framebuffer_size,
};

/// Longest time step fed to the animation, so a stalled terminal does not teleport clouds.
const MAX_FRAME_STEP: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Running,
    Quit,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub palette: Palette,
    pub mountain_count: usize,
    pub show_clouds: bool,
    pub animate: bool,
    pub haze: f64,
    pub layout: LayoutArg,
    pub frame_tick: u64,
    pub last_frame_at: Instant,
    /// Ridges came from a scene file; regeneration reseeds them instead of replacing them.
    pinned_layout: bool,
    layout_rng: SequenceGenerator,
    scene: Scene,
    clouds: CloudField,
    framebuffer: Framebuffer,
}

impl AppState {
    /// Builds the first scene for a `width` x `height` pixel framebuffer.
    pub fn new(cli: &Cli, config: Option<&SceneConfig>, width: usize, height: usize) -> Result<Self> {
        let palette = config.and_then(|c| c.palette).unwrap_or(cli.palette);
        let scheme = config
            .and_then(|c| c.scheme)
            .unwrap_or_else(|| palette.scheme());
        let mut layout_rng = cli
            .seed
            .map_or_else(SequenceGenerator::from_entropy, SequenceGenerator::new);
        let clouds = CloudField::new(usize::from(cli.clouds), layout_rng.next_seed());

        let scripted = config.is_some_and(|c| !c.mountains.is_empty());
        let mut scene = match cli.layout {
            LayoutArg::Gray if !scripted => {
                let mut scene =
                    Scene::with_default_mountains(width.max(2), cli.mountain_count())?;
                scene.set_scheme(scheme);
                scene
            }
            _ => Scene::new(scheme),
        };
        scene.add_layer(Box::new(SunLayer::new(scheme.sun)));

        let mut state = Self {
            mode: AppMode::Running,
            running: true,
            palette,
            mountain_count: cli.mountain_count(),
            show_clouds: cli.clouds > 0,
            animate: !cli.no_animation,
            haze: cli.haze,
            layout: cli.layout,
            frame_tick: 0,
            last_frame_at: Instant::now(),
            pinned_layout: false,
            layout_rng,
            scene,
            clouds,
            framebuffer: Framebuffer::new(width, height),
        };

        match config.filter(|c| !c.mountains.is_empty()) {
            Some(config) => {
                state.scene.set_mountains(config.mountains.clone())?;
                state.mountain_count = config.mountains.len();
                state.pinned_layout = true;
                log::info!("loaded {} ridges from scene config", state.mountain_count);
            }
            None if state.layout == LayoutArg::Gray => {}
            None => state.rebuild_layout()?,
        }
        state.redraw();
        Ok(state)
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    #[must_use]
    pub fn pinned_layout(&self) -> bool {
        self.pinned_layout
    }

    pub fn handle_event(&mut self, event: AppEvent, tx: &mpsc::Sender<AppEvent>, cli: &Cli) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                start_frame_task(tx.clone(), cli.fps);
            }
            AppEvent::TickFrame => {
                let now = Instant::now();
                let delta = now.duration_since(self.last_frame_at);
                self.last_frame_at = now;
                self.frame_tick = self.frame_tick.saturating_add(1);
                self.advance(delta.as_secs_f64());
            }
            AppEvent::Input(Event::Key(key)) => {
                if let Some(intent) = intent_for_key(key) {
                    self.apply_intent(intent)?;
                }
            }
            AppEvent::Input(Event::Resize(columns, rows)) => {
                let (width, height) = framebuffer_size(columns, rows);
                self.resize(width, height);
            }
            AppEvent::Input(_) => {}
            AppEvent::Quit => self.mode = AppMode::Quit,
        }
        Ok(())
    }

    pub fn apply_intent(&mut self, intent: Intent) -> Result<()> {
        match intent {
            Intent::Quit => {
                self.mode = AppMode::Quit;
                return Ok(());
            }
            Intent::RegenerateAll => self.regenerate()?,
            Intent::SwitchPalette(palette) => self.switch_palette(palette),
            Intent::SetMountainCount(count) => {
                self.mountain_count = count;
                self.pinned_layout = false;
                self.rebuild_layout()?;
                self.reseed_clouds();
            }
            Intent::ToggleClouds => self.show_clouds = !self.show_clouds,
        }
        self.redraw();
        Ok(())
    }

    /// Steps the animation by `dt` seconds (clamped) and repaints.
    pub fn advance(&mut self, dt: f64) {
        if self.animate {
            let dt = dt.clamp(0.0, MAX_FRAME_STEP);
            self.scene.advance(dt);
            self.clouds.advance(dt);
        }
        self.redraw();
    }

    /// Resizes the framebuffer. Ridges keep their profiles and are resampled to the new width.
    pub fn resize(&mut self, width: usize, height: usize) {
        if width == self.framebuffer.width() && height == self.framebuffer.height() {
            return;
        }
        log::debug!("framebuffer resized to {width}x{height}");
        self.framebuffer.resize(width, height);
        self.redraw();
    }

    fn regenerate(&mut self) -> Result<()> {
        if self.pinned_layout || self.layout == LayoutArg::Gray {
            let rng = &mut self.layout_rng;
            self.scene.reseed_mountains(|| rng.next_seed());
            log::debug!(
                "reseeded ridges: {:?}",
                self.scene
                    .mountains()
                    .iter()
                    .map(|m| m.spec().seed)
                    .collect::<Vec<_>>()
            );
        } else {
            self.rebuild_layout()?;
        }
        self.reseed_clouds();
        Ok(())
    }

    fn rebuild_layout(&mut self) -> Result<()> {
        let width = self.framebuffer.width().max(2);
        let specs = match self.layout {
            LayoutArg::Gray => default_specs(self.mountain_count, width),
            LayoutArg::Random => random_specs(
                self.mountain_count,
                width,
                self.framebuffer.height(),
                self.palette,
                self.scene.scheme(),
                self.haze,
                &mut self.layout_rng,
            ),
        };
        log::debug!(
            "generated {} ridges with seeds {:?}",
            specs.len(),
            specs.iter().map(|s| s.seed).collect::<Vec<_>>()
        );
        self.scene.set_mountains(specs)?;
        Ok(())
    }

    fn switch_palette(&mut self, palette: Palette) {
        log::info!("switching palette to {}", palette.label());
        self.palette = palette;
        let scheme = palette.scheme();
        self.scene.set_scheme(scheme);
        self.scene.clear_layers();
        self.scene.add_layer(Box::new(SunLayer::new(scheme.sun)));
    }

    fn reseed_clouds(&mut self) {
        let seed = self.layout_rng.next_seed();
        self.clouds.reseed(seed);
    }

    fn redraw(&mut self) {
        let (width, height) = (self.framebuffer.width(), self.framebuffer.height());
        let clouds = if self.show_clouds {
            self.clouds.clouds(width, height)
        } else {
            Vec::new()
        };
        self.scene.render(&mut self.framebuffer.context(), &clouds);
    }
}
