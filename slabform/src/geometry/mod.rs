/// Geometric primitives: points, rectangles, edges and the slab outline
pub mod primitives;
