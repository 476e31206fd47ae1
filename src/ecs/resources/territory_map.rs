use std::collections::VecDeque;

use bevy_ecs::resource::Resource;

use crate::model::PlayerId;

#[derive(Debug, Clone, Copy)]
struct Tile {
    owner: PlayerId,
    root: bool,
    connected: bool,
    blinking: bool,
}

impl Default for Tile {
    fn default() -> Self {
        Self {
            owner: PlayerId::GAIA,
            root: false,
            connected: false,
            blinking: false,
        }
    }
}

/// Partitioned territory grid.
///
/// World coordinates map onto tiles by `floor(coord / tile_size)`. Anything
/// outside the grid reads as unconnected gaia territory. A tile is connected
/// when it can reach a root tile of its owner through 4-neighbour tiles of the
/// same owner; gaia territory is never connected.
#[derive(Resource, Debug, Clone)]
pub struct TerritoryMap {
    width: usize,
    height: usize,
    tile_size: f64,
    tiles: Vec<Tile>,
}

impl TerritoryMap {
    pub fn new(width: usize, height: usize, tile_size: f64) -> Self {
        Self {
            width,
            height,
            tile_size,
            tiles: vec![Tile::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }

    /// World-space centre of a tile, handy for placing entities on it.
    pub fn tile_center(&self, tile_x: usize, tile_y: usize) -> (f64, f64) {
        (
            (tile_x as f64 + 0.5) * self.tile_size,
            (tile_y as f64 + 0.5) * self.tile_size,
        )
    }

    fn tile_index(&self, tile_x: usize, tile_y: usize) -> Option<usize> {
        (tile_x < self.width && tile_y < self.height).then(|| tile_y * self.width + tile_x)
    }

    fn index_at(&self, x: f64, y: f64) -> Option<usize> {
        if !(x >= 0.0 && y >= 0.0) || self.tile_size <= 0.0 {
            return None;
        }
        let tile_x = (x / self.tile_size).floor() as usize;
        let tile_y = (y / self.tile_size).floor() as usize;
        self.tile_index(tile_x, tile_y)
    }

    pub fn tile_owner(&self, tile_x: usize, tile_y: usize) -> Option<PlayerId> {
        self.tile_index(tile_x, tile_y).map(|i| self.tiles[i].owner)
    }

    pub fn is_root(&self, tile_x: usize, tile_y: usize) -> bool {
        self.tile_index(tile_x, tile_y).is_some_and(|i| self.tiles[i].root)
    }

    // -- Painting (driven by commands) --

    /// Returns false when the tile is outside the grid.
    pub fn set_tile_owner(&mut self, tile_x: usize, tile_y: usize, owner: PlayerId) -> bool {
        match self.tile_index(tile_x, tile_y) {
            Some(i) => {
                self.tiles[i].owner = owner;
                true
            }
            None => false,
        }
    }

    /// Mark or clear a territory root (the tile a player's network grows from).
    pub fn set_root(&mut self, tile_x: usize, tile_y: usize, root: bool) -> bool {
        match self.tile_index(tile_x, tile_y) {
            Some(i) => {
                self.tiles[i].root = root;
                true
            }
            None => false,
        }
    }

    /// Fill a rectangle of tiles (inclusive bounds, clipped to the grid).
    pub fn fill_owner(&mut self, from: (usize, usize), to: (usize, usize), owner: PlayerId) {
        for tile_y in from.1..=to.1.min(self.height.saturating_sub(1)) {
            for tile_x in from.0..=to.0.min(self.width.saturating_sub(1)) {
                self.set_tile_owner(tile_x, tile_y, owner);
            }
        }
    }

    /// Flood-fill connectivity from every non-gaia root tile.
    pub fn recompute_connectivity(&mut self) {
        for tile in &mut self.tiles {
            tile.connected = false;
        }

        let mut queue: VecDeque<usize> = self
            .tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| t.root && !t.owner.is_gaia())
            .map(|(i, _)| i)
            .collect();
        for &i in &queue {
            self.tiles[i].connected = true;
        }

        while let Some(i) = queue.pop_front() {
            let owner = self.tiles[i].owner;
            for n in self.adjacent(i) {
                let tile = &mut self.tiles[n];
                if !tile.connected && tile.owner == owner {
                    tile.connected = true;
                    queue.push_back(n);
                }
            }
        }
    }

    fn adjacent(&self, i: usize) -> impl Iterator<Item = usize> + use<> {
        let (x, y) = (i % self.width, i / self.width);
        let (w, h) = (self.width, self.height);
        [
            (x > 0).then(|| i - 1),
            (x + 1 < w).then(|| i + 1),
            (y > 0).then(|| i - w),
            (y + 1 < h).then(|| i + w),
        ]
        .into_iter()
        .flatten()
    }

    // -- Queries --

    pub fn get_owner(&self, x: f64, y: f64) -> PlayerId {
        self.index_at(x, y)
            .map_or(PlayerId::GAIA, |i| self.tiles[i].owner)
    }

    pub fn is_connected(&self, x: f64, y: f64) -> bool {
        self.index_at(x, y).is_some_and(|i| self.tiles[i].connected)
    }

    /// Count bordering tiles per foreign owner around the same-owner region
    /// containing `(x, y)`.
    ///
    /// With `filter_connected`, only bordering tiles that are themselves
    /// connected are counted. The result has one slot per player; owners at or
    /// beyond `num_players` are ignored.
    pub fn get_neighbours(&self, x: f64, y: f64, filter_connected: bool, num_players: usize) -> Vec<u32> {
        let mut counts = vec![0u32; num_players];
        let Some(start) = self.index_at(x, y) else {
            return counts;
        };

        let owner = self.tiles[start].owner;
        let mut visited = vec![false; self.tiles.len()];
        let mut queue = VecDeque::from([start]);
        visited[start] = true;

        while let Some(i) = queue.pop_front() {
            for n in self.adjacent(i) {
                let tile = self.tiles[n];
                if tile.owner == owner {
                    if !visited[n] {
                        visited[n] = true;
                        queue.push_back(n);
                    }
                    continue;
                }
                if filter_connected && !tile.connected {
                    continue;
                }
                if let Some(slot) = tile.owner.index().and_then(|p| counts.get_mut(p)) {
                    *slot += 1;
                }
            }
        }
        counts
    }

    // -- Blinking (UI hint) --

    pub fn set_blinking(&mut self, x: f64, y: f64, blinking: bool) {
        if let Some(i) = self.index_at(x, y) {
            self.tiles[i].blinking = blinking;
        }
    }

    pub fn is_blinking(&self, x: f64, y: f64) -> bool {
        self.index_at(x, y).is_some_and(|i| self.tiles[i].blinking)
    }
}
