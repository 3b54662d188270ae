use std::collections::HashMap;

use blockfit_core::Placement;
use rand::Rng;

/// Height of the caption strip under the container.
const CAPTION_HEIGHT: f64 = 24.0;

/// Hands out one random colour per placed size and reuses it afterwards.
pub struct ColorMap<R: Rng> {
    rng: R,
    colors: HashMap<String, String>,
}

impl<R: Rng> ColorMap<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            colors: HashMap::new(),
        }
    }

    pub fn color_for(&mut self, size_key: &str) -> String {
        if let Some(c) = self.colors.get(size_key) {
            return c.clone();
        }
        let c = random_color(&mut self.rng);
        self.colors.insert(size_key.to_string(), c.clone());
        c
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

fn random_color<R: Rng>(rng: &mut R) -> String {
    format!("#{:06X}", rng.gen_range(0..=0xFF_FFFFu32))
}

/// Draws the container, each placed block with its label, and the fullness caption.
pub fn render_svg<R: Rng>(placement: &Placement, colors: &mut ColorMap<R>) -> String {
    let w = placement.container.width;
    let h = placement.container.height;
    let total_h = h + CAPTION_HEIGHT;
    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{total_h}\" viewBox=\"0 0 {w} {total_h}\">\n"
    ));
    out.push_str(&format!(
        "  <rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" fill=\"#FFFFFF\" stroke=\"#000000\"/>\n"
    ));
    for p in &placement.placements {
        let fill = colors.color_for(&p.size_key());
        let cx = p.left + p.width() / 2.0;
        let cy = p.top + p.height() / 2.0;
        out.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" stroke=\"#000000\" stroke-width=\"0.5\"/>\n",
            p.left,
            p.top,
            p.width(),
            p.height(),
            fill
        ));
        out.push_str(&format!(
            "  <text x=\"{cx}\" y=\"{cy}\" font-family=\"sans-serif\" font-size=\"10\" text-anchor=\"middle\" dominant-baseline=\"middle\">{}</text>\n",
            p.label()
        ));
    }
    out.push_str(&format!(
        "  <text x=\"0\" y=\"{}\" font-family=\"sans-serif\" font-size=\"14\">fullness {}</text>\n",
        h + CAPTION_HEIGHT - 6.0,
        placement.fullness
    ));
    out.push_str("</svg>\n");
    out
}
