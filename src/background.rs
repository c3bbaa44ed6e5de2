use crate::constants::PARTICLE_CANVAS_ID;
use crate::dom;
use anyhow::anyhow;
use glam::Vec2;
use instant::Instant;
use portfolio_core::constants::{LINE_RGB, LINE_WIDTH, PARTICLE_FILL};
use portfolio_core::{ParticleConfig, ParticleField, Surface};
use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const STATS_EVERY_FRAMES: u32 = 600;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `Surface` backed by a 2D canvas context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(PARTICLE_FILL);
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, opacity: f32) {
        let [r, g, b] = LINE_RGB;
        self.ctx
            .set_stroke_style_str(&format!("rgba({r}, {g}, {b}, {opacity})"));
        self.ctx.set_line_width(LINE_WIDTH);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}

struct FrameStats {
    frames: u32,
    since: Instant,
}

impl FrameStats {
    fn new() -> Self {
        Self {
            frames: 0,
            since: Instant::now(),
        }
    }

    fn record(&mut self) {
        self.frames += 1;
        if self.frames < STATS_EVERY_FRAMES {
            return;
        }
        let secs = self.since.elapsed().as_secs_f32();
        if secs > 0.0 {
            log::debug!("[particles] {:.1} fps", self.frames as f32 / secs);
        }
        self.frames = 0;
        self.since = Instant::now();
    }
}

/// Handle to a running particle background.
///
/// The animation loop keeps itself alive through its own frame callback, so
/// dropping the handle leaves it running; call [`ParticleBackground::stop`]
/// to cancel the pending frame and release the callback.
pub struct ParticleBackground {
    field: Rc<RefCell<ParticleField>>,
    surface: Rc<RefCell<CanvasSurface>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

impl ParticleBackground {
    pub fn new(canvas: &web::HtmlCanvasElement, config: ParticleConfig) -> anyhow::Result<Self> {
        let surface = CanvasSurface::new(canvas)?;
        let (w, h) = dom::fit_canvas_to_viewport(canvas);
        let field = ParticleField::spawn(config, w as f32, h as f32, &mut rand::thread_rng());
        let field = Rc::new(RefCell::new(field));
        wire_resize(canvas.clone(), field.clone());
        Ok(Self {
            field,
            surface: Rc::new(RefCell::new(surface)),
            raf_id: Rc::new(Cell::new(None)),
            tick: Rc::new(RefCell::new(None)),
        })
    }

    pub fn field(&self) -> Rc<RefCell<ParticleField>> {
        self.field.clone()
    }

    pub fn is_running(&self) -> bool {
        self.tick.borrow().is_some()
    }

    pub fn start(&self) {
        if self.is_running() {
            return;
        }
        let field = self.field.clone();
        let surface = self.surface.clone();
        let raf_id = self.raf_id.clone();
        let tick_next = self.tick.clone();
        let mut stats = FrameStats::new();
        *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            field.borrow_mut().frame(&mut *surface.borrow_mut());
            stats.record();
            raf_id.set(request_frame(&tick_next));
        }) as Box<dyn FnMut()>));
        self.raf_id.set(request_frame(&self.tick));
    }

    pub fn stop(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let window = web::window()?;
    let slot = tick.borrow();
    let cb = slot.as_ref()?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .map_err(|e| log::error!("requestAnimationFrame error: {:?}", e))
        .ok()
}

// Only the backing size changes; particles stay where they are.
fn wire_resize(canvas: web::HtmlCanvasElement, field: Rc<RefCell<ParticleField>>) {
    dom::add_window_listener("resize", move || {
        let (w, h) = dom::fit_canvas_to_viewport(&canvas);
        field.borrow_mut().resize(w as f32, h as f32);
    });
}

/// Start the background if the page has a canvas for it.
pub fn init(document: &web::Document) -> anyhow::Result<Option<ParticleBackground>> {
    let Some(el) = document.get_element_by_id(PARTICLE_CANVAS_ID) else {
        log::debug!("[particles] no #{}; background disabled", PARTICLE_CANVAS_ID);
        return Ok(None);
    };
    let canvas = el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("#{} is not a canvas: {:?}", PARTICLE_CANVAS_ID, e))?;
    let background = ParticleBackground::new(&canvas, ParticleConfig::default())?;
    background.start();
    log::info!(
        "[particles] running with {} particles",
        background.field.borrow().len()
    );
    Ok(Some(background))
}
