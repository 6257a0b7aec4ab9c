use super::*;

/// Translates between node ids of a graph and an induced subgraph of it.
/// Nodes of the subgraph are numbered `0..k` in the order of the selected nodes.
#[derive(Clone, Debug, Default)]
pub struct NodeMapper {
    old_of_new: Vec<Node>,
    new_of_old: fxhash::FxHashMap<Node, Node>,
}

impl NodeMapper {
    pub fn from_nodes(nodes: &[Node]) -> Self {
        let new_of_old = nodes
            .iter()
            .enumerate()
            .map(|(new, &old)| (old, new as Node))
            .collect();

        Self {
            old_of_new: nodes.to_vec(),
            new_of_old,
        }
    }

    pub fn new_id_of(&self, old: Node) -> Option<Node> {
        self.new_of_old.get(&old).copied()
    }

    pub fn old_id_of(&self, new: Node) -> Option<Node> {
        self.old_of_new.get(new as usize).copied()
    }

    /// ** Panics if `new` is not a node of the subgraph **
    pub fn old_id(&self, new: Node) -> Node {
        self.old_of_new[new as usize]
    }

    pub fn len(&self) -> usize {
        self.old_of_new.len()
    }

    pub fn is_empty(&self) -> bool {
        self.old_of_new.is_empty()
    }
}

pub trait InducedSubgraph: Sized {
    /// Returns a new graph containing exactly the given nodes (which must be distinct)
    /// and all edges between them, together with the id translation.
    fn vertex_induced(&self, nodes: &[Node]) -> (Self, NodeMapper);
}

impl<G> InducedSubgraph for G
where
    G: AdjacencyList + GraphEdgeEditing,
{
    fn vertex_induced(&self, nodes: &[Node]) -> (Self, NodeMapper) {
        let mapping = NodeMapper::from_nodes(nodes);
        assert_eq!(mapping.len(), mapping.new_of_old.len(), "duplicate nodes");

        let mut result = G::new(nodes.len() as NumNodes);

        for (new_u, &u) in nodes.iter().enumerate() {
            let new_u = new_u as Node;
            for &v in self.neighbors_of(u) {
                if let Some(new_v) = mapping.new_id_of(v)
                    && new_u < new_v
                {
                    result.add_edge(new_u, new_v);
                }
            }
        }

        (result, mapping)
    }
}
