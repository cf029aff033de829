use crate::domain::graph::GraphStore;
use std::f64::consts::PI;
use std::fmt::Write;

/// Renders a standalone TikZ document: nodes on a circle, one `\draw` per edge.
pub fn render_tikz(graph: &GraphStore) -> String {
    let n = graph.node_count();
    let radius = n as f64 * 0.5;
    let mut out = String::new();

    out.push_str("\\documentclass{standalone}\n");
    out.push_str("\\usepackage{tikz}\n");
    out.push_str("\\begin{document}\n");
    out.push_str("\\begin{tikzpicture}[->,>=stealth]\n");

    for i in graph.nodes() {
        let angle = 2.0 * PI * i as f64 / n as f64;
        let x = radius * angle.cos();
        let y = radius * angle.sin();
        let _ = writeln!(out, "    \\node ({i}) at ({x:.4},{y:.4}) {{{i}}};");
    }

    for (u, v) in graph.edges() {
        if u == v {
            let _ = writeln!(
                out,
                "    \\draw ({u}) edge [out=45, in=135, distance=1cm] ({u});"
            );
        } else {
            let _ = writeln!(out, "    \\draw ({u}) -- ({v});");
        }
    }

    out.push_str("\\end{tikzpicture}\n");
    out.push_str("\\end{document}\n");
    out
}
