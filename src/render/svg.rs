use std::fmt::Write as _;

use crate::foundation::core::{Canvas, Role};
use crate::render::layout::{FrameLayout, TextClass, TextLine};
use crate::render::style::{FrameStyle, Palette};

/// Escape text for use in SVG character data and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Serialize a resolved layout into a standalone SVG document of `output` pixel size.
///
/// The layout's own canvas becomes the `viewBox`, so a layout resolved in design space scales
/// to any output size (letterboxed when the aspect ratio differs).
pub fn frame_svg(layout: &FrameLayout, style: &FrameStyle, output: Canvas) -> String {
    let p = &style.palette;
    let (w, h) = (layout.canvas.width, layout.canvas.height);
    let mut svg = String::with_capacity(8 * 1024);

    // `write!` into a String is infallible.
    let _ = writeln!(
        svg,
        r##"<svg width="{}" height="{}" viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">"##,
        output.width,
        output.height,
    );
    write_defs(&mut svg, layout.role, p);
    write_backdrop(&mut svg, layout, p);

    for (i, rect) in layout.option_boxes.iter().enumerate() {
        let _ = writeln!(
            svg,
            r##"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" rx="20" fill="url(#optionGrad)" stroke="{}" stroke-width="2" opacity="0.9" data-option="{i}"/>"##,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
            p.accent,
        );
        let _ = writeln!(
            svg,
            r##"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" rx="16" fill="none" stroke="#ffffff" stroke-opacity="0.1" stroke-width="1"/>"##,
            rect.x0 + 4.0,
            rect.y0 + 4.0,
            (rect.width() - 8.0).max(0.0),
            (rect.height() - 8.0).max(0.0),
        );
    }

    let font_family = escape_xml(&style.font_family);
    for line in &layout.lines {
        write_text(&mut svg, line, &font_family, p);
    }

    svg.push_str("</svg>\n");
    svg
}

fn write_defs(svg: &mut String, role: Role, p: &Palette) {
    let [b0, b1, b2] = &p.background;
    // The answer frame runs the background gradient in reverse.
    let (from, to) = match role {
        Role::Question => (b0, b2),
        Role::Answer => (b2, b0),
    };
    let (glow_a, glow_b) = match role {
        Role::Question => (&p.accent, &p.secondary_accent),
        Role::Answer => (&p.success, &p.success_secondary),
    };
    let [o0, o1] = &p.option_fill;

    let _ = writeln!(
        svg,
        r##"<defs>
<linearGradient id="bg" x1="0%" y1="0%" x2="100%" y2="100%">
<stop offset="0%" stop-color="{from}"/><stop offset="50%" stop-color="{b1}"/><stop offset="100%" stop-color="{to}"/>
</linearGradient>
<radialGradient id="halo" cx="50%" cy="50%" r="50%">
<stop offset="0%" stop-color="{glow_a}" stop-opacity="0.3"/><stop offset="100%" stop-color="{glow_b}" stop-opacity="0.1"/>
</radialGradient>
<linearGradient id="optionGrad" x1="0%" y1="0%" x2="100%" y2="0%">
<stop offset="0%" stop-color="{o0}" stop-opacity="0.9"/><stop offset="100%" stop-color="{o1}" stop-opacity="0.8"/>
</linearGradient>
<filter id="glow" x="-20%" y="-50%" width="140%" height="200%">
<feGaussianBlur stdDeviation="3" result="blur"/>
<feMerge><feMergeNode in="blur"/><feMergeNode in="SourceGraphic"/></feMerge>
</filter>
<filter id="shadow" x="-10%" y="-50%" width="120%" height="200%">
<feDropShadow dx="2" dy="2" stdDeviation="2" flood-color="#000000" flood-opacity="0.8"/>
</filter>
</defs>"##
    );
}

fn write_backdrop(svg: &mut String, layout: &FrameLayout, p: &Palette) {
    let (w, h) = (
        f64::from(layout.canvas.width),
        f64::from(layout.canvas.height),
    );
    let _ = writeln!(svg, r##"<rect width="100%" height="100%" fill="url(#bg)"/>"##);

    // Decorative halos and shards, placed relative to the canvas.
    let (halo_a, halo_b, shard_a, shard_b) = match layout.role {
        Role::Question => (
            (0.14 * w, 0.21 * h, 120.0),
            (0.86 * w, 0.68 * h, 180.0),
            &p.accent,
            &p.secondary_accent,
        ),
        Role::Answer => (
            (0.19 * w, 0.16 * h, 140.0),
            (0.81 * w, 0.73 * h, 200.0),
            &p.success,
            &p.success_secondary,
        ),
    };
    for (cx, cy, r) in [halo_a, halo_b] {
        let _ = writeln!(
            svg,
            r##"<circle cx="{cx:.1}" cy="{cy:.1}" r="{r:.1}" fill="url(#halo)"/>"##
        );
    }
    let _ = writeln!(
        svg,
        r##"<polygon points="{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}" fill="{shard_a}" opacity="0.1"/>"##,
        0.18 * w,
        0.83 * h,
        0.37 * w,
        0.885 * h,
        0.28 * w,
        0.94 * h,
    );
    let _ = writeln!(
        svg,
        r##"<polygon points="{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}" fill="{shard_b}" opacity="0.15"/>"##,
        0.74 * w,
        0.10 * h,
        0.93 * w,
        0.05 * h,
        0.83 * w,
        0.16 * h,
    );
}

fn write_text(svg: &mut String, line: &TextLine, font_family: &str, p: &Palette) {
    let (fill, filter) = match line.class {
        TextClass::Banner => (p.text.as_str(), "glow"),
        TextClass::Countdown | TextClass::CallToAction => (p.accent.as_str(), "glow"),
        TextClass::SuccessBanner => (p.success.as_str(), "glow"),
        TextClass::Explanation => (p.muted_text.as_str(), "shadow"),
        TextClass::Question | TextClass::Option | TextClass::Answer => (p.text.as_str(), "shadow"),
    };
    let weight = if line.class.bold() { "bold" } else { "normal" };

    let _ = writeln!(
        svg,
        r##"<text x="{:.1}" y="{:.1}" font-family="{font_family}" font-size="{}" font-weight="{weight}" fill="{fill}" text-anchor="middle" filter="url(#{filter})">{}</text>"##,
        line.x,
        line.y,
        line.class.font_size(),
        escape_xml(&line.text),
    );
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
