//! Islewave - an interactive procedural archipelago
//!
//! Domain-warped Voronoi islands rise out of an animated water plane,
//! contour-shaded and circled by an orbiting camera, with every generation
//! parameter tunable live from the keyboard.

mod cli;

use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use clap::Parser;

use cli::Args;
use islewave::camera::CameraSystem;
use islewave::panel::{ControlPanel, PanelAction};
use islewave::params::*;
use islewave::rendering::{RenderSystem, TerrainUniforms, WaterUniforms};
use islewave::snapshot::save_snapshot;
use islewave::terrain::{HeightmapGenerator, TerrainGrid};
use islewave::water::{WaterField, WaterPlane};

fn vec4(rgb: [f32; 3], w: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], w]
}

/// Main application state
struct App {
    // Window and rendering
    window: Option<Arc<Window>>,
    render_system: Option<RenderSystem>,

    // Terrain and water
    generator: HeightmapGenerator,
    terrain_mesh: TerrainGrid,
    water_plane: WaterPlane,

    // Live parameter panel (owns the editable parameter copy)
    panel: ControlPanel,
    panel_params: TerrainParams,

    // View
    camera: CameraSystem,

    // Configuration
    render_config: RenderConfig,
    material: TerrainMaterial,
    water_params: WaterParams,
    recording: Option<RecordingConfig>,

    // Time tracking
    start_time: Instant,
    frame_num: usize,
}

impl App {
    fn new(args: &Args) -> Self {
        let grid = args.grid_spec();
        let params = args.terrain_params();
        let water_params = WaterParams::default();

        // Generate the initial archipelago and bake it into the mesh
        let mut generator = HeightmapGenerator::new(grid, params.clone(), args.seed);
        let field = generator.update();
        let mut terrain_mesh = TerrainGrid::new(grid);
        terrain_mesh.apply_height_field(&field);

        let water_plane = WaterPlane::new(&grid, &water_params);
        let camera = CameraSystem::new(args.parse_camera_preset());

        Self {
            window: None,
            render_system: None,
            generator,
            terrain_mesh,
            water_plane,
            panel: ControlPanel::new(),
            panel_params: params,
            camera,
            render_config: RenderConfig::default(),
            material: TerrainMaterial::default(),
            water_params,
            recording: args.create_recording_config(),
            start_time: Instant::now(),
            frame_num: 0,
        }
    }

    /// Run a generation pass requested from the panel and push the new
    /// elevations to the GPU.
    fn run_generation(&mut self, action: PanelAction) {
        self.generator.apply_params(self.panel_params.clone());

        let pass_start = Instant::now();
        let field = match action {
            PanelAction::Regenerate => self.generator.regenerate(),
            PanelAction::Update => self.generator.update(),
        };
        self.terrain_mesh.apply_height_field(&field);

        if let Some(ref render_system) = self.render_system {
            render_system.update_terrain_vertices(&self.terrain_mesh.vertices);
        }

        log::info!(
            "{:?}: {}x{} samples, {} islands, {:.1}ms",
            action,
            field.width,
            field.height,
            self.generator.seed_points().len(),
            pass_start.elapsed().as_secs_f64() * 1000.0
        );
    }

    /// Render a single frame
    fn render_frame(&mut self) {
        let Some(ref render_system) = self.render_system else {
            return;
        };

        let time_s = self.start_time.elapsed().as_secs_f32();

        let (view_proj, camera_pos) = self
            .camera
            .create_view_proj_matrix(time_s, &self.render_config);
        let view_proj = view_proj.to_cols_array_2d();

        let terrain_uniforms = TerrainUniforms {
            view_proj,
            base_color: vec4(self.material.base_color, 1.0),
            line_color: vec4(self.material.line_color, 1.0),
            sun_direction: vec4(self.material.sun_direction, 0.0),
            camera_pos: vec4(camera_pos.to_array(), 1.0),
            contour_spacing: self.material.contour_spacing_m,
            contour_width: self.material.contour_width_m,
            contour_intensity: self.material.contour_intensity,
            fade_start: self.material.fade_start_m,
            fade_end: self.material.fade_end_m,
            _padding: [0.0; 3],
        };
        render_system.update_terrain_uniforms(&terrain_uniforms);

        let water_uniforms = WaterUniforms {
            view_proj,
            deep_color: vec4(self.water_params.deep_color, 1.0),
            mid_color: vec4(self.water_params.mid_color, 1.0),
            light_color: vec4(self.water_params.light_color, 1.0),
            time: time_s,
            wave_scale: self.water_params.wave_scale,
            slow_rate: self.water_params.slow_rate,
            fast_rate: self.water_params.fast_rate,
        };
        render_system.update_water_uniforms(&water_uniforms);

        if let Err(e) = render_system.render(self.frame_num) {
            log::error!("Render error: {:?}", e);
        }
        self.frame_num += 1;
    }
}

impl ApplicationHandler for App {
    fn about_to_wait(&mut self, _event_loop: &winit::event_loop::ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn resumed(&mut self, event_loop: &winit::event_loop::ActiveEventLoop) {
        if self.window.is_some() {
            return; // Already initialized
        }

        // Create window
        let window_attributes = Window::default_attributes()
            .with_title("Islewave - Procedural Archipelago")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.render_config.window_width,
                self.render_config.window_height,
            ));

        let window = Arc::new(event_loop.create_window(window_attributes).unwrap());

        // Initialize rendering system
        let render_system = pollster::block_on(RenderSystem::new(
            Arc::clone(&window),
            &self.terrain_mesh,
            &self.water_plane,
            self.recording.clone(),
        ))
        .unwrap();

        println!("\nIslewave is running!");
        println!("Tab cycles parameters, arrows adjust, R regenerates, U updates");
        println!("Press ESC to quit\n");

        self.window = Some(window);
        self.render_system = Some(render_system);
    }

    fn window_event(
        &mut self,
        event_loop: &winit::event_loop::ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(key),
                        ..
                    },
                ..
            } => match key {
                KeyCode::Escape => event_loop.exit(),
                other => {
                    if let Some(action) = self.panel.handle_key(other, &mut self.panel_params) {
                        self.run_generation(action);
                    }
                }
            },
            WindowEvent::RedrawRequested => {
                self.render_frame();

                // Recording mode exits once the requested duration is captured
                if let Some(ref recording) = self.recording {
                    if self.frame_num >= recording.total_frames() {
                        println!(
                            "Recording complete: {} frames in {}",
                            self.frame_num,
                            recording.frames_dir()
                        );
                        event_loop.exit();
                    }
                }
            }
            _ => {}
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    println!("Islewave - procedural archipelago terrain and water");

    // Snapshot mode renders a top-down map without opening a window
    if let Some(ref path) = args.snapshot {
        let grid = args.grid_spec();
        let mut generator = HeightmapGenerator::new(grid, args.terrain_params(), args.seed);
        let field = generator.update();
        let water = WaterField::new(WaterParams::default());
        if let Err(e) = save_snapshot(path, &field, generator.params(), &grid, &water) {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        println!("Snapshot written to {}", path);
        return;
    }

    println!("Initializing systems...\n");

    let mut app = App::new(&args);
    let event_loop = EventLoop::new().unwrap();
    let _ = event_loop.run_app(&mut app);
}
