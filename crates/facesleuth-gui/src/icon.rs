//! FaceSleuth application icon generator.
//!
//! Produces a procedural icon: a bar chart (label distribution) inside a
//! magnifying-glass ring and handle (the "sleuth" motif).  The icon is
//! rendered at an arbitrary resolution as RGBA pixel data suitable for use
//! as a window icon or for ICO file generation.

/// Generate a FaceSleuth icon as egui `IconData`.
pub fn generate_icon(size: u32) -> egui::IconData {
    let rgba = render_icon(size);
    egui::IconData {
        rgba,
        width: size,
        height: size,
    }
}

/// Render the icon into an RGBA pixel buffer (top-to-bottom row order).
pub fn render_icon(size: u32) -> Vec<u8> {
    let s = size as f32;
    let mut pixels = vec![0u8; (size * size * 4) as usize];

    // ── Layout ──────────────────────────────────────────────────
    // Lens centre is shifted up-left to leave room for the handle.
    let cx = s * 0.42;
    let cy = s * 0.42;
    let radius = s * 0.34;

    // Ring (magnifying-glass bezel).
    let ring_width = s * 0.045;
    let ring_outer = radius + ring_width;

    // Handle extends from circle edge at 45° toward the lower-right.
    let angle_45: f32 = std::f32::consts::FRAC_PI_4;
    let h_start_x = cx + ring_outer * angle_45.cos();
    let h_start_y = cy + ring_outer * angle_45.sin();
    let h_end_x = s * 0.91;
    let h_end_y = s * 0.91;
    let h_width_start = s * 0.055;
    let h_width_end = s * 0.075;

    // ── Bar chart inside the lens ───────────────────────────────
    // Three bars of a distribution, relative to the lens geometry:
    // (centre offset ×radius, height ×radius, colour).
    let bars: &[(f32, f32, [u8; 3])] = &[
        (-0.45, 0.55, [0x89, 0xb4, 0xfa]), // blue
        (0.0, 0.95, [0xa6, 0xe3, 0xa1]),   // green
        (0.45, 0.70, [0xf9, 0xe2, 0xaf]),  // amber
    ];
    let bar_half_w = radius * 0.15;
    let baseline = cy + radius * 0.62;

    // ── Per-pixel rendering ─────────────────────────────────────
    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            let dx = px - cx;
            let dy = py - cy;
            let dist = (dx * dx + dy * dy).sqrt();

            let mut cr: u8 = 0;
            let mut cg: u8 = 0;
            let mut cb: u8 = 0;
            let mut ca: f32 = 0.0;

            // 1. Lens interior: dark chart background with bars. ──
            if dist < radius + 1.5 {
                let edge_aa = smooth_edge(dist, radius);

                // Background.
                cr = 0x1e;
                cg = 0x1e;
                cb = 0x2e;

                // Bars (hard edges; the lens circle provides the AA).
                for &(offset, height, col) in bars {
                    let bx = cx + offset * radius;
                    if (px - bx).abs() <= bar_half_w
                        && py <= baseline
                        && py >= baseline - height * radius
                    {
                        cr = col[0];
                        cg = col[1];
                        cb = col[2];
                        break;
                    }
                }

                // Subtle radial shading (darker toward edge).
                let shade = 1.0 - 0.12 * (dist / radius);
                cr = (cr as f32 * shade).min(255.0) as u8;
                cg = (cg as f32 * shade).min(255.0) as u8;
                cb = (cb as f32 * shade).min(255.0) as u8;

                // Glass-like highlight in the upper-left quadrant.
                let hx = dx + radius * 0.30;
                let hy = dy + radius * 0.30;
                let highlight_dist = (hx * hx + hy * hy).sqrt();
                let highlight = (1.0 - highlight_dist / (radius * 0.65)).max(0.0) * 0.18;
                cr = (cr as f32 + highlight * 255.0).min(255.0) as u8;
                cg = (cg as f32 + highlight * 255.0).min(255.0) as u8;
                cb = (cb as f32 + highlight * 255.0).min(255.0) as u8;

                ca = edge_aa;
            }

            // 2. Magnifying-glass ring. ──────────────────────────
            let ring_inner = radius - 0.5;
            if dist > ring_inner && dist < ring_outer + 1.5 {
                let aa_in = smooth_edge_inv(dist, ring_inner);
                let aa_out = smooth_edge(dist, ring_outer);
                let ring_alpha = aa_in * aa_out;

                // Slight gradient: lighter at top, darker at bottom.
                let grad = 0.5 + 0.5 * (1.0 - (dy / radius).clamp(-1.0, 1.0)) * 0.5;
                let rr = (0x70 as f32 * grad).min(255.0) as u8;
                let rg = (0x78 as f32 * grad).min(255.0) as u8;
                let rb = (0x85 as f32 * grad).min(255.0) as u8;

                cr = lerp_c(cr, rr, ring_alpha);
                cg = lerp_c(cg, rg, ring_alpha);
                cb = lerp_c(cb, rb, ring_alpha);
                ca = ca + (1.0 - ca) * ring_alpha;
            }

            // 3. Handle. ─────────────────────────────────────────
            let ld = point_to_seg_dist(px, py, h_start_x, h_start_y, h_end_x, h_end_y);
            let t = project_t(px, py, h_start_x, h_start_y, h_end_x, h_end_y);

            if t > -0.05 && t < 1.05 {
                let half_w = h_width_start + (h_width_end - h_width_start) * t.clamp(0.0, 1.0);
                if ld < half_w + 1.5 {
                    let handle_aa = smooth_edge(ld, half_w);

                    // Slight gradient along the handle.
                    let tt = t.clamp(0.0, 1.0);
                    let hr = lerp_c(0x78, 0x50, tt);
                    let hg = lerp_c(0x7d, 0x55, tt);
                    let hb = lerp_c(0x88, 0x60, tt);

                    cr = lerp_c(cr, hr, handle_aa);
                    cg = lerp_c(cg, hg, handle_aa);
                    cb = lerp_c(cb, hb, handle_aa);
                    ca = ca + (1.0 - ca) * handle_aa;
                }
            }

            let idx = ((y * size + x) * 4) as usize;
            pixels[idx] = cr;
            pixels[idx + 1] = cg;
            pixels[idx + 2] = cb;
            pixels[idx + 3] = (ca * 255.0).clamp(0.0, 255.0) as u8;
        }
    }

    pixels
}

// ── Helpers ─────────────────────────────────────────────────────

/// Smooth anti-aliased edge (1 → 0 as `dist` crosses `edge`).
fn smooth_edge(dist: f32, edge: f32) -> f32 {
    let d = dist - edge;
    if d < -1.0 {
        1.0
    } else if d > 1.0 {
        0.0
    } else {
        0.5 - d * 0.5
    }
}

/// Inverted smooth edge (0 → 1 as `dist` crosses `edge` going up).
fn smooth_edge_inv(dist: f32, edge: f32) -> f32 {
    let d = dist - edge;
    if d < -1.0 {
        0.0
    } else if d > 1.0 {
        1.0
    } else {
        0.5 + d * 0.5
    }
}

/// Perpendicular distance from a point to a line segment.
fn point_to_seg_dist(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let abx = bx - ax;
    let aby = by - ay;
    let len_sq = abx * abx + aby * aby;
    if len_sq < 0.0001 {
        return ((px - ax).powi(2) + (py - ay).powi(2)).sqrt();
    }
    let t = (((px - ax) * abx + (py - ay) * aby) / len_sq).clamp(0.0, 1.0);
    let proj_x = ax + t * abx;
    let proj_y = ay + t * aby;
    ((px - proj_x).powi(2) + (py - proj_y).powi(2)).sqrt()
}

/// Project point onto line segment, returning parameter t ∈ [0, 1].
fn project_t(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let abx = bx - ax;
    let aby = by - ay;
    let len_sq = abx * abx + aby * aby;
    if len_sq < 0.0001 {
        return 0.0;
    }
    ((px - ax) * abx + (py - ay) * aby) / len_sq
}

/// Linear interpolation for a single colour channel.
fn lerp_c(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).clamp(0.0, 255.0) as u8
}
