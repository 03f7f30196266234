use rand::Rng;
use ratatui::layout::{Position, Rect};
use tracing::debug;

use super::actions::{Nav, ViewAction};
use crate::gradient::{self, ColorStyle, GradientDescriptor, GradientType};

/// Where the viewport sits over the scrollable content, in whatever unit
/// the surface measures (pixels, terminal rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollGeometry {
    pub viewport: u32,
    pub offset: u32,
    pub content: u32,
    pub threshold: u32,
}

impl ScrollGeometry {
    /// `offset + viewport >= content - threshold`, without underflow.
    pub fn is_near_bottom(&self) -> bool {
        self.offset
            .saturating_add(self.viewport)
            .saturating_add(self.threshold)
            >= self.content
    }
}

/// Settings plus the accumulated gradient list. Replaced wholesale on every
/// transition; `items.len() == page * PAGE_SIZE` once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    gradient_type: GradientType,
    color_style: ColorStyle,
    items: Vec<GradientDescriptor>,
    page: u32,
    /// Bumped on every regeneration so the shell can reset its cursor.
    generation: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(GradientType::default(), ColorStyle::default())
    }
}

impl ViewState {
    /// Settings only, nothing generated yet.
    pub fn new(gradient_type: GradientType, color_style: ColorStyle) -> Self {
        Self {
            gradient_type,
            color_style,
            items: Vec::new(),
            page: 1,
            generation: 0,
        }
    }

    /// Initial load: the first page for the given settings.
    pub fn load<R: Rng + ?Sized>(gradient_type: GradientType, color_style: ColorStyle, rng: &mut R) -> Self {
        Self::new(gradient_type, color_style).reduce(ViewAction::Refresh, rng)
    }

    pub fn gradient_type(&self) -> GradientType {
        self.gradient_type
    }

    pub fn color_style(&self) -> ColorStyle {
        self.color_style
    }

    pub fn items(&self) -> &[GradientDescriptor] {
        &self.items
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn reduce<R: Rng + ?Sized>(self, action: ViewAction, rng: &mut R) -> Self {
        match action {
            ViewAction::SetType(t) if t != self.gradient_type => {
                let style = self.color_style;
                self.regenerate(t, style, rng)
            }
            ViewAction::SetStyle(s) if s != self.color_style => {
                let ty = self.gradient_type;
                self.regenerate(ty, s, rng)
            }
            ViewAction::Refresh => {
                let (ty, style) = (self.gradient_type, self.color_style);
                self.regenerate(ty, style, rng)
            }
            ViewAction::Scrolled(geometry) if !self.items.is_empty() && geometry.is_near_bottom() => {
                self.append_page(rng)
            }
            _ => self,
        }
    }

    fn regenerate<R: Rng + ?Sized>(self, gradient_type: GradientType, color_style: ColorStyle, rng: &mut R) -> Self {
        debug!(%gradient_type, %color_style, "regenerate");
        Self {
            gradient_type,
            color_style,
            items: gradient::build_page(gradient_type, color_style, rng),
            page: 1,
            generation: self.generation + 1,
        }
    }

    fn append_page<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.items
            .extend(gradient::build_page(self.gradient_type, self.color_style, rng));
        self.page += 1;
        debug!(page = self.page, items = self.items.len(), "append page");
        self
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: std::time::Instant,
    pub ttl: std::time::Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>, ttl: std::time::Duration) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            created_at: std::time::Instant::now(),
            ttl,
        }
    }

    pub fn error(message: impl Into<String>, ttl: std::time::Duration) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: std::time::Instant::now(),
            ttl,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.ttl
    }
}

/// Grid shape recorded by the last render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMetrics {
    pub columns: usize,
    pub tile_height: u16,
    pub viewport_rows: u16,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            columns: 1,
            tile_height: crate::config::defaults::TILE_HEIGHT,
            viewport_rows: 0,
        }
    }
}

impl GridMetrics {
    pub fn tile_rows(&self, len: usize) -> usize {
        len.div_ceil(self.columns.max(1))
    }

    /// Whole tile rows that fit in the viewport, at least one.
    pub fn visible_tile_rows(&self) -> usize {
        usize::from(self.viewport_rows / self.tile_height.max(1)).max(1)
    }

    pub fn max_top_row(&self, len: usize) -> usize {
        self.tile_rows(len).saturating_sub(self.visible_tile_rows())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileHitbox {
    pub index: usize,
    pub area: Rect,
    pub css: Rect,
    pub tailwind: Rect,
}

/// Clickable regions recorded by the last render.
#[derive(Debug, Clone, Default)]
pub struct Hitboxes {
    pub tiles: Vec<TileHitbox>,
    pub type_control: Rect,
    pub style_control: Rect,
    pub refresh: Rect,
}

impl Hitboxes {
    pub fn tile_at(&self, pos: Position) -> Option<&TileHitbox> {
        self.tiles.iter().find(|t| t.area.contains(pos))
    }
}

pub struct AppState {
    pub should_quit: bool,
    pub view: ViewState,

    // Grid cursor
    pub selected: usize,
    /// First visible tile row.
    pub top_row: usize,
    pub grid: GridMetrics,
    pub hitboxes: Hitboxes,

    pub show_help: bool,
    pub toast: Option<Toast>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ViewState::default())
    }
}

impl AppState {
    pub fn new(view: ViewState) -> Self {
        Self {
            should_quit: false,
            view,
            selected: 0,
            top_row: 0,
            grid: GridMetrics::default(),
            hitboxes: Hitboxes::default(),
            show_help: false,
            toast: None,
        }
    }

    /// Run a view transition; a regeneration sends the cursor home.
    pub fn apply_view<R: Rng + ?Sized>(&mut self, action: ViewAction, rng: &mut R) {
        let generation = self.view.generation();
        let view = std::mem::take(&mut self.view);
        self.view = view.reduce(action, rng);
        if self.view.generation() != generation {
            self.selected = 0;
            self.top_row = 0;
        }
    }

    pub fn expire_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.view.items().len() {
            self.selected = index;
            self.ensure_selected_visible();
        }
    }

    pub fn navigate(&mut self, nav: Nav) {
        let len = self.view.items().len();
        if len == 0 {
            return;
        }
        let last = len - 1;
        let cols = self.grid.columns.max(1);
        let page = self.grid.visible_tile_rows() * cols;

        self.selected = match nav {
            Nav::Left => self.selected.saturating_sub(1),
            Nav::Right => (self.selected + 1).min(last),
            Nav::Up => self.selected.saturating_sub(cols),
            Nav::Down => (self.selected + cols).min(last),
            Nav::PageUp => self.selected.saturating_sub(page),
            Nav::PageDown => (self.selected + page).min(last),
            Nav::Top => 0,
            Nav::Bottom => last,
            Nav::WheelUp => {
                self.top_row = self.top_row.saturating_sub(1);
                return;
            }
            Nav::WheelDown => {
                self.top_row = (self.top_row + 1).min(self.grid.max_top_row(len));
                return;
            }
        };
        self.ensure_selected_visible();
    }

    fn ensure_selected_visible(&mut self) {
        let row = self.selected / self.grid.columns.max(1);
        let visible = self.grid.visible_tile_rows();
        if row < self.top_row {
            self.top_row = row;
        } else if row >= self.top_row + visible {
            self.top_row = row + 1 - visible;
        }
    }

    /// Keep the scroll position valid after the grid shape changed.
    pub fn clamp_scroll(&mut self) {
        let len = self.view.items().len();
        self.top_row = self.top_row.min(self.grid.max_top_row(len));
        if len > 0 {
            self.selected = self.selected.min(len - 1);
        }
    }

    /// Current scroll position in terminal rows.
    pub fn scroll_geometry(&self, threshold_rows: u16) -> ScrollGeometry {
        let tile_h = u32::from(self.grid.tile_height);
        let rows = u32::try_from(self.grid.tile_rows(self.view.items().len())).unwrap_or(u32::MAX);
        let top = u32::try_from(self.top_row).unwrap_or(u32::MAX);
        ScrollGeometry {
            viewport: u32::from(self.grid.viewport_rows),
            offset: top.saturating_mul(tile_h),
            content: rows.saturating_mul(tile_h),
            threshold: u32::from(threshold_rows),
        }
    }
}
