use serde::{Deserialize, Serialize};

use crate::graphics::{Color, Renderer2d};
use crate::ui::{Point, Rect};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewTree<A> {
    pub nodes: Vec<ViewNode<A>>,
}

impl<A> Default for ViewTree<A> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<A> ViewTree<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: ViewNode<A>) {
        self.nodes.push(node);
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn buttons(&self) -> impl Iterator<Item = &ButtonNode<A>> {
        self.nodes.iter().filter_map(|node| match node {
            ViewNode::Button(button) => Some(button),
            _ => None,
        })
    }

    pub fn button(&self, id: u32) -> Option<&ButtonNode<A>> {
        self.buttons().find(|b| b.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewNode<A> {
    Button(ButtonNode<A>),
    Text(TextNode),
    Rect(RectNode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonStyle {
    pub fill: Color,
    pub hover_fill: Color,
    pub text: Color,
    pub border: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonNode<A> {
    pub id: u32,
    pub rect: Rect,
    pub label: String,
    pub text_scale: f32,
    pub action: A,
    pub enabled: bool,
    pub style: ButtonStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    pub pos: Point,
    pub text: String,
    pub color: Color,
    pub scale: f32,
    /// Center `text` horizontally on `pos.x`.
    pub centered: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectNode {
    pub rect: Rect,
    pub color: Color,
}

/// Actions of every enabled button under `click`, topmost first.
pub fn hit_test_actions<A: Clone>(view: &ViewTree<A>, click: Point) -> Vec<A> {
    let mut actions = Vec::new();
    for node in view.nodes.iter().rev() {
        if let ViewNode::Button(button) = node {
            if button.enabled && button.rect.contains(click) {
                actions.push(button.action.clone());
            }
        }
    }
    actions
}

/// Id of the topmost enabled button under the pointer.
pub fn hovered_button<A>(view: &ViewTree<A>, pointer: Option<Point>) -> Option<u32> {
    let pointer = pointer?;
    view.nodes.iter().rev().find_map(|node| match node {
        ViewNode::Button(button) if button.enabled && button.rect.contains(pointer) => {
            Some(button.id)
        }
        _ => None,
    })
}

/// Draws every node in order, highlighting the hovered button.
pub fn draw_view_tree<A>(gfx: &mut dyn Renderer2d, view: &ViewTree<A>, hovered: Option<u32>) {
    for node in &view.nodes {
        match node {
            ViewNode::Rect(rect) => gfx.fill_rect(rect.rect, rect.color),
            ViewNode::Text(text) => {
                let mut pos = text.pos;
                if text.centered {
                    pos.x -= gfx.text_width(&text.text, text.scale) / 2.0;
                }
                gfx.draw_text_scaled(pos, &text.text, text.color, text.scale);
            }
            ViewNode::Button(button) => draw_button(gfx, button, hovered == Some(button.id)),
        }
    }
}

fn draw_button<A>(gfx: &mut dyn Renderer2d, button: &ButtonNode<A>, hovered: bool) {
    let style = button.style;
    let fill = if hovered && button.enabled {
        style.hover_fill
    } else {
        style.fill
    };
    gfx.fill_rect(button.rect, fill);
    if let Some(border) = style.border {
        gfx.rect_outline(button.rect, 2.0, border);
    }

    let w = gfx.text_width(&button.label, button.text_scale);
    let h = gfx.text_height(button.text_scale);
    let c = button.rect.center();
    gfx.draw_text_scaled(
        Point::new(c.x - w / 2.0, c.y - h / 2.0),
        &button.label,
        style.text,
        button.text_scale,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLE: ButtonStyle = ButtonStyle {
        fill: [10, 10, 10, 255],
        hover_fill: [20, 20, 20, 255],
        text: [255, 255, 255, 255],
        border: None,
    };

    fn button(id: u32, rect: Rect, action: &'static str, enabled: bool) -> ViewNode<&'static str> {
        ViewNode::Button(ButtonNode {
            id,
            rect,
            label: action.to_string(),
            text_scale: 2.0,
            action,
            enabled,
            style: STYLE,
        })
    }

    #[test]
    fn hit_test_returns_topmost_enabled_first() {
        let mut view = ViewTree::new();
        view.push(button(1, Rect::new(0.0, 0.0, 100.0, 100.0), "under", true));
        view.push(button(2, Rect::new(10.0, 10.0, 20.0, 20.0), "over", true));
        view.push(button(3, Rect::new(10.0, 10.0, 20.0, 20.0), "disabled", false));

        assert_eq!(
            hit_test_actions(&view, Point::new(15.0, 15.0)),
            vec!["over", "under"]
        );
        assert_eq!(hit_test_actions(&view, Point::new(200.0, 15.0)), Vec::<&str>::new());
    }

    #[test]
    fn hovered_button_ignores_disabled() {
        let mut view = ViewTree::new();
        view.push(button(1, Rect::new(0.0, 0.0, 50.0, 50.0), "a", true));
        view.push(button(2, Rect::new(0.0, 0.0, 50.0, 50.0), "b", false));
        assert_eq!(hovered_button(&view, Some(Point::new(5.0, 5.0))), Some(1));
        assert_eq!(hovered_button(&view, None), None);
        assert_eq!(view.button(2).map(|b| b.enabled), Some(false));
    }
}
