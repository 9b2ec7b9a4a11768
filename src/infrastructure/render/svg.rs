// 円形レイアウトのSVG描画

use std::f64::consts::PI;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::graph::Graph;

const CANVAS: f64 = 640.0;
const NODE_RADIUS: f64 = 18.0;
const MARGIN: f64 = 48.0;

/// ノードを円周上に等間隔に置いたSVG文字列を生成する
pub fn render_svg(graph: &Graph, title: &str) -> String {
    let n = graph.node_count();
    let center = CANVAS / 2.0;
    let layout_radius = center - MARGIN;

    // ノード1を真上に、時計回りに配置
    let position = |v: usize| -> (f64, f64) {
        let angle = 2.0 * PI * ((v - 1) as f64) / (n.max(1) as f64) - PI / 2.0;
        (center + layout_radius * angle.cos(), center + layout_radius * angle.sin())
    };

    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{0}\" height=\"{0}\" viewBox=\"0 0 {0} {0}\">\n",
        CANVAS
    ));
    out.push_str(&format!(
        "  <text x=\"{:.1}\" y=\"24\" text-anchor=\"middle\" font-size=\"16\">{}</text>\n",
        center, title
    ));

    for e in graph.edges() {
        let (x1, y1) = position(e.u());
        let (x2, y2) = position(e.v());
        out.push_str(&format!(
            "  <line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"black\" stroke-width=\"1.5\"/>\n",
            x1, y1, x2, y2
        ));
    }

    for v in graph.nodes() {
        let (x, y) = position(v);
        out.push_str(&format!(
            "  <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"{:.1}\" fill=\"red\" stroke=\"black\"/>\n",
            x, y, NODE_RADIUS
        ));
        out.push_str(&format!(
            "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" dominant-baseline=\"central\" font-size=\"14\" font-weight=\"bold\">{}</text>\n",
            x, y, v
        ));
    }

    out.push_str("</svg>\n");
    out
}

/// SVGをファイルに書き出す
pub fn save_svg(graph: &Graph, title: &str, path: &Path) -> Result<()> {
    let svg = render_svg(graph, title);
    fs::write(path, svg).with_context(|| format!("SVGを書き込めません: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::graph::backbone_graph;
    use crate::domain::graph::Graph;

    #[test]
    fn svg_contains_all_nodes_and_edges() {
        let g = backbone_graph(6).unwrap();
        let svg = render_svg(&g, "MGraph n:6");
        assert_eq!(svg.matches("<circle").count(), 6);
        assert_eq!(svg.matches("<line").count(), g.edge_count());
        assert!(svg.contains("MGraph n:6"));
    }

    #[test]
    fn svg_labels_every_node() {
        let g = backbone_graph(5).unwrap();
        let svg = render_svg(&g, "t");
        for v in 1..=5 {
            assert!(svg.contains(&format!(">{}</text>", v)));
        }
    }

    #[test]
    fn empty_graph_renders_without_panic() {
        let g = Graph::new(0);
        let svg = render_svg(&g, "empty");
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<circle").count(), 0);
    }
}
