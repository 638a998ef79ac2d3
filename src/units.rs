#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct RowsCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct ColumnsCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct LayersCount(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct NodesCount(pub usize);
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct EdgesCount(pub usize);

/// World space length of one cell side, used when handing cells to a scene.
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct CellSize(pub f32);
