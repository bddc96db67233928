use crate::constants::*;
use crate::dom;
use crate::frame::AnimationLoop;
use crate::listener::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use vextra_core::constants::{NAVBAR_ACTIVE_LINE_PX, NAVBAR_SCROLLED_PX, PARALLAX_DEFAULT_SPEED};
use vextra_core::decor::parallax_offset;
use vextra_core::lifecycle::{Ledger, Scope};
use vextra_core::progress::ContainerGeometry;
use vextra_core::tree::{parse_node_index, TreeState};
use web_sys as web;

pub fn mount(ledger: &Rc<Ledger>, document: &web::Document) -> Scope {
    let mut scope = Scope::new("scroll");
    if let Some(root) = dom::query(document, TREE_ROOT) {
        if let Err(e) = mount_tree(ledger, root, &mut scope) {
            log::warn!("[tree] {:?}", e);
        }
    }
    let layers = dom::query_all(document, PARALLAX);
    if !layers.is_empty() {
        if let Err(e) = mount_parallax(ledger, layers, &mut scope) {
            log::warn!("[parallax] {:?}", e);
        }
    }
    if let Some(nav) = dom::query(document, NAVBAR) {
        if let Err(e) = mount_navbar(ledger, document.clone(), nav, &mut scope) {
            log::warn!("[navbar] {:?}", e);
        }
    }
    scope
}

struct TreeDom {
    root: web::Element,
    nodes: Vec<(usize, web::Element)>,
    fill: Option<web::Element>,
    glow: Option<web::Element>,
    end_dot: Option<web::Element>,
}

impl TreeDom {
    fn new(root: web::Element) -> Self {
        let nodes = dom::query_all(&root, TREE_NODE)
            .into_iter()
            .filter_map(|n| {
                let index = n
                    .get_attribute(TREE_NODE_INDEX_ATTR)
                    .and_then(|raw| parse_node_index(&raw))?;
                Some((index, n))
            })
            .collect();
        Self {
            fill: dom::query(&root, TREE_TRUNK_FILL),
            glow: dom::query(&root, TREE_TRUNK_GLOW),
            end_dot: dom::query(&root, TREE_END_DOT),
            root,
            nodes,
        }
    }

    fn geometry(&self) -> ContainerGeometry {
        let rect = self.root.get_bounding_client_rect();
        ContainerGeometry::new(rect.top(), rect.height(), dom::viewport_height())
    }

    fn node_tops(&self) -> Vec<(usize, f64)> {
        self.nodes
            .iter()
            .map(|(i, n)| (*i, n.get_bounding_client_rect().top()))
            .collect()
    }

    fn show_node(&self, index: usize) {
        for (_, row) in self.nodes.iter().filter(|(i, _)| *i == index) {
            dom::set_class(row, CLASS_VISIBLE, true);
            if let Some(branch) = dom::query(row, TREE_BRANCH) {
                dom::set_class(&branch, CLASS_ANIMATE, true);
            }
            for part in dom::query_all(row, TREE_NODE_PARTS) {
                dom::set_class(&part, CLASS_VISIBLE, true);
            }
        }
    }
}

/// Scroll/resize recompute the target and the visibility set; the frame loop
/// eases the trunk fill toward the target independently.
fn mount_tree(ledger: &Rc<Ledger>, root: web::Element, scope: &mut Scope) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let tree_dom = Rc::new(TreeDom::new(root));
    let state = Rc::new(RefCell::new(TreeState::new(tree_dom.nodes.len())));

    let on_scroll = {
        let tree_dom = tree_dom.clone();
        let state = state.clone();
        move || {
            let geom = tree_dom.geometry();
            let mut st = state.borrow_mut();
            for index in st.on_scroll(&geom, tree_dom.node_tops()) {
                tree_dom.show_node(index);
            }
            if let Some(dot) = &tree_dom.end_dot {
                dom::set_class(dot, CLASS_VISIBLE, st.end_dot_visible());
            }
        }
    };
    on_scroll();

    let scroll_handler = on_scroll.clone();
    scope.hold(EventListener::passive(ledger, &window, "scroll", move |_| scroll_handler())?);
    scope.hold(EventListener::passive(ledger, &window, "resize", move |_| on_scroll())?);

    let frame_dom = tree_dom.clone();
    let frames = AnimationLoop::start(ledger, move || {
        let mut st = state.borrow_mut();
        st.on_frame();
        let height = format!("{}%", st.progress.fill_percent());
        if let Some(fill) = &frame_dom.fill {
            dom::set_style(fill, "height", &height);
        }
        if let Some(glow) = &frame_dom.glow {
            dom::set_style(glow, "height", &height);
            dom::set_style(glow, "opacity", &st.progress.glow_opacity().to_string());
        }
        true
    })
    .ok_or_else(|| anyhow::anyhow!("animation loop unavailable"))?;
    scope.hold(frames);
    log::info!("[tree] mounted with {} nodes", tree_dom.nodes.len());
    Ok(())
}

fn mount_parallax(
    ledger: &Rc<Ledger>,
    layers: Vec<web::Element>,
    scope: &mut Scope,
) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let layers: Vec<(web::Element, f64)> = layers
        .into_iter()
        .map(|el| {
            let speed = dom::data_attr_f64(&el, PARALLAX_SPEED_ATTR).unwrap_or(PARALLAX_DEFAULT_SPEED);
            (el, speed)
        })
        .collect();
    scope.hold(EventListener::passive(ledger, &window, "scroll", move |_| {
        let vh = dom::viewport_height();
        for (el, speed) in &layers {
            let top = el.get_bounding_client_rect().top();
            let y = parallax_offset(vh, top, *speed);
            dom::set_style(el, "transform", &format!("translateY({}px)", y));
        }
    })?);
    Ok(())
}

fn mount_navbar(
    ledger: &Rc<Ledger>,
    document: web::Document,
    nav: web::Element,
    scope: &mut Scope,
) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let update = move || {
        dom::set_class(&nav, CLASS_SCROLLED, dom::scroll_y() > NAVBAR_SCROLLED_PX);
        let active = NAV_SECTIONS.iter().copied().find(|id| {
            document.get_element_by_id(id).is_some_and(|el| {
                let r = el.get_bounding_client_rect();
                r.top() <= NAVBAR_ACTIVE_LINE_PX && r.bottom() >= NAVBAR_ACTIVE_LINE_PX
            })
        });
        if let Some(active) = active {
            let anchor = format!("#{}", active);
            for link in dom::query_all(&nav, NAV_LINK) {
                let is_active = link.get_attribute("href").is_some_and(|h| h.ends_with(&anchor));
                dom::set_class(&link, CLASS_ACTIVE, is_active);
            }
        }
    };
    update();
    scope.hold(EventListener::passive(ledger, &window, "scroll", move |_| update())?);
    Ok(())
}
