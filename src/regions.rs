use crate::search::SearchSpace;
use crate::{Cost, Error, GridGraph, Point, Result};

use std::collections::VecDeque;

/// The Type used to reference a Region of a [`RegionMap`]
pub type RegionID = u32;

const UNASSIGNED: RegionID = RegionID::MAX;

/// A set of Tiles that a search treats as a single Node
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    cost: Cost,
    members: Vec<Point>,
    boundary: Vec<RegionID>,
}

/// The Grid with every connected area of free Tiles collapsed into a single Node.
///
/// Tiles with a cost of `0` that are connected through other free Tiles form one Region.
/// Every other Tile is a Region of its own. Two Regions are neighbors if any of their Tiles are
/// neighbors on the Grid.
///
/// Walking within a free Region costs nothing, so collapsing it does not change the cost of
/// any Path. It does however make the graph a lot smaller on Grids with large open areas.
///
/// The map is created once per Grid and never changes afterwards. Region ids are assigned in
/// row-major order of the first Tile of each Region.
///
/// ## Examples
/// ```
/// use grid_shortest_paths::{GridGraph, RegionMap};
///
/// let grid = GridGraph::from_rows(&[
///     [0, 0, 5],
///     [3, 0, 0],
///     [0, 4, 0],
/// ]).unwrap();
///
/// let regions = RegionMap::compress(&grid);
///
/// // the large free area, the free Tile at (2, 0) and three costly Tiles
/// assert_eq!(regions.len(), 5);
/// assert_eq!(regions.region_of((0, 0)), regions.region_of((2, 2)));
/// assert_ne!(regions.region_of((0, 0)), regions.region_of((2, 0)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionMap {
    rows: usize,
    cols: usize,
    wall_threshold: Cost,
    region_of: Vec<RegionID>,
    regions: Vec<Region>,
}

impl RegionMap {
    /// Flood-fills the free areas of `grid` and connects the resulting Regions.
    pub fn compress(grid: &GridGraph) -> RegionMap {
        #[cfg(feature = "log")]
        let timer = std::time::Instant::now();

        let (rows, cols) = (grid.rows(), grid.cols());
        let costs = grid.costs();
        let wall_threshold = grid.wall_threshold();
        let is_free = |index: usize| costs[index] == 0 && costs[index] < wall_threshold;

        let mut region_of = vec![UNASSIGNED; costs.len()];
        let mut regions: Vec<Region> = vec![];

        let mut queue = VecDeque::new();
        let mut all_neighbors = vec![];

        for index in 0..costs.len() {
            if region_of[index] != UNASSIGNED {
                continue;
            }
            let id = regions.len() as RegionID;
            let start = (index / cols, index % cols);
            region_of[index] = id;

            let mut members = vec![start];
            if is_free(index) {
                queue.push_back(start);
                while let Some(current) = queue.pop_front() {
                    all_neighbors.clear();
                    grid.neighbors(current, &mut all_neighbors);
                    for &other in all_neighbors.iter() {
                        let other_index = other.0 * cols + other.1;
                        if region_of[other_index] == UNASSIGNED && is_free(other_index) {
                            region_of[other_index] = id;
                            members.push(other);
                            queue.push_back(other);
                        }
                    }
                }
                members.sort_unstable();
            }

            regions.push(Region {
                cost: costs[index],
                members,
                boundary: vec![],
            });
        }
        re_trace!("flood fill regions", timer);

        for (index, &id) in region_of.iter().enumerate() {
            all_neighbors.clear();
            grid.neighbors((index / cols, index % cols), &mut all_neighbors);
            let boundary = &mut regions[id as usize].boundary;
            for &(row, col) in all_neighbors.iter() {
                let other_id = region_of[row * cols + col];
                if other_id != id {
                    boundary.push(other_id);
                }
            }
        }
        for region in regions.iter_mut() {
            region.boundary.sort_unstable();
            region.boundary.dedup();
        }
        re_trace!("connect regions", timer);

        #[cfg(feature = "log")]
        log::debug!(
            "compressed {} tiles into {} regions",
            costs.len(),
            regions.len()
        );

        RegionMap {
            rows,
            cols,
            wall_threshold,
            region_of,
            regions,
        }
    }

    /// The number of Regions
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// `true` if there are no Regions. Never the case for a valid Grid.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// The number of Regions made of free Tiles
    pub fn zero_region_count(&self) -> usize {
        self.regions.iter().filter(|region| region.cost == 0).count()
    }

    /// The Region that contains `loc`
    pub fn region_of(&self, loc: Point) -> Result<RegionID> {
        if loc.0 < self.rows && loc.1 < self.cols {
            Ok(self.region_of[loc.0 * self.cols + loc.1])
        } else {
            Err(Error::OutOfBounds {
                loc,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// The cost of walking onto any Tile of the Region
    #[track_caller]
    pub fn region_cost(&self, id: RegionID) -> Cost {
        self.regions[id as usize].cost
    }

    /// The Regions that touch `id`, sorted by id
    #[track_caller]
    pub fn boundary(&self, id: RegionID) -> &[RegionID] {
        &self.regions[id as usize].boundary
    }

    /// The Tiles of the Region in row-major order
    #[track_caller]
    pub fn members(&self, id: RegionID) -> &[Point] {
        &self.regions[id as usize].members
    }

    /// Iterates over all Regions
    pub fn iter(&self) -> impl Iterator<Item = (RegionID, &Region)> + '_ {
        self.regions
            .iter()
            .enumerate()
            .map(|(id, region)| (id as RegionID, region))
    }
}

impl Region {
    /// The cost of walking onto any Tile of the Region
    pub fn cost(&self) -> Cost {
        self.cost
    }
    /// The Tiles of the Region in row-major order
    pub fn members(&self) -> &[Point] {
        &self.members
    }
    /// The Regions that touch this one, sorted by id
    pub fn boundary(&self) -> &[RegionID] {
        &self.boundary
    }
}

impl SearchSpace for RegionMap {
    type Id = RegionID;

    fn enter_cost(&self, id: RegionID) -> Cost {
        self.regions[id as usize].cost
    }
    fn is_passable(&self, id: RegionID) -> bool {
        self.regions
            .get(id as usize)
            .map_or(false, |region| region.cost < self.wall_threshold)
    }
    fn neighbors(&self, id: RegionID, target: &mut Vec<RegionID>) {
        target.extend_from_slice(&self.regions[id as usize].boundary);
    }
    /// Regions have no single position, so there is no estimate.
    fn heuristic(&self, _id: RegionID, _goal: RegionID) -> Cost {
        0
    }
    fn size_hint(&self) -> usize {
        self.regions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Relaxer;

    #[test]
    fn flood_fill() {
        let grid = GridGraph::from_rows(&[
            [0, 0, 1, 0],
            [1, 0, 1, 0],
            [0, 1, 0, 0],
        ])
        .unwrap();
        let regions = RegionMap::compress(&grid);

        let a = regions.region_of((0, 0)).unwrap();
        assert_eq!(regions.members(a), &[(0, 0), (0, 1), (1, 1)]);
        assert_eq!(regions.region_cost(a), 0);

        let b = regions.region_of((0, 3)).unwrap();
        assert_eq!(regions.members(b), &[(0, 3), (1, 3), (2, 2), (2, 3)]);

        let lonely = regions.region_of((2, 0)).unwrap();
        assert_eq!(regions.members(lonely), &[(2, 0)]);

        // 3 free regions + 4 singletons
        assert_eq!(regions.len(), 7);
        assert_eq!(regions.zero_region_count(), 3);
    }

    #[test]
    fn ids_follow_row_major_order() {
        let grid = GridGraph::from_rows(&[[0, 2], [3, 0]]).unwrap();
        let regions = RegionMap::compress(&grid);
        assert_eq!(regions.region_of((0, 0)), Ok(0));
        assert_eq!(regions.region_of((0, 1)), Ok(1));
        assert_eq!(regions.region_of((1, 0)), Ok(2));
        assert_eq!(regions.region_of((1, 1)), Ok(3));
        assert!(regions.region_of((2, 0)).is_err());
    }

    #[test]
    fn regions_partition_the_grid() {
        let grid = GridGraph::from_rows(&[
            [0, 0, 4, 0, 0],
            [0, 3, 4, 0, 1],
            [0, 0, 0, 0, 1],
            [7, 7, 7, 1, 0],
        ])
        .unwrap();
        let regions = RegionMap::compress(&grid);

        let mut seen = vec![];
        for (id, region) in regions.iter() {
            for &member in region.members() {
                assert_eq!(regions.region_of(member), Ok(id));
                seen.push(member);
            }
            if region.cost() != 0 {
                assert_eq!(region.members().len(), 1);
            }
        }
        seen.sort();
        assert_eq!(seen, grid.points().collect::<Vec<_>>());
    }

    #[test]
    fn boundaries_are_symmetric() {
        let grid = GridGraph::from_rows(&[
            [0, 0, 4, 0],
            [5, 0, 4, 0],
            [0, 6, 0, 0],
        ])
        .unwrap();
        let regions = RegionMap::compress(&grid);

        for (id, region) in regions.iter() {
            assert!(!region.boundary().contains(&id));
            assert!(region.boundary().windows(2).all(|w| w[0] < w[1]));
            for &other in region.boundary() {
                assert!(regions.boundary(other).contains(&id));
            }
        }

        let open = regions.region_of((0, 0)).unwrap();
        let wall = regions.region_of((0, 2)).unwrap();
        assert!(regions.boundary(open).contains(&wall));
        assert!(!regions.boundary(open).contains(&regions.region_of((2, 0)).unwrap()));
    }

    #[test]
    fn search_on_regions() {
        let grid = GridGraph::from_rows(&[
            [0, 0, 0, 9],
            [9, 9, 0, 9],
            [2, 0, 0, 0],
        ])
        .unwrap();
        let regions = RegionMap::compress(&grid);
        let start = regions.region_of((0, 0)).unwrap();
        let goal = regions.region_of((2, 0)).unwrap();

        let result = Relaxer::new(&regions).run(start, &[goal]);
        assert_eq!(result.cost(goal), Some(2));
        assert_eq!(result.path_to(goal).unwrap(), vec![start, goal]);
    }

    #[test]
    fn walls_stay_walls() {
        let grid = GridGraph::from_rows(&[[0, 50, 0]])
            .unwrap()
            .with_wall_threshold(50);
        let regions = RegionMap::compress(&grid);
        let left = regions.region_of((0, 0)).unwrap();
        let right = regions.region_of((0, 2)).unwrap();
        assert_ne!(left, right);

        let result = Relaxer::new(&regions).run(left, &[right]);
        assert_eq!(result.cost(right), None);
    }
}
