//! Adjacent cells derived with integer arithmetic on the lattice pair.
//!
//! Moving one cell north adds `1 << (32 - lat_bits)` to the latitude
//! integer, moving east does the same on longitude with `lng_bits`. The
//! additions wrap modulo `2^32`, so stepping off one edge of the lattice
//! lands on the cell at the opposite edge.

use crate::codec::lattice::cell_step;
use crate::geohash::Geohash;
use serde::{Deserialize, Serialize};

/// Compass direction of an adjacent cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const CARDINALS: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Cell offsets as `(lat, lng)`, each -1, 0 or 1.
    #[inline]
    pub const fn offsets(self) -> (i8, i8) {
        match self {
            Direction::North => (1, 0),
            Direction::NorthEast => (1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (-1, 1),
            Direction::South => (-1, 0),
            Direction::SouthWest => (-1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (1, -1),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }
}

#[inline]
const fn shift_axis(value: u32, step: u32, offset: i8) -> u32 {
    match offset {
        1 => value.wrapping_add(step),
        -1 => value.wrapping_sub(step),
        _ => value,
    }
}

/// The eight cells around a geohash, named like `geohash::Neighbors`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Neighbors {
    pub n: Geohash,
    pub ne: Geohash,
    pub e: Geohash,
    pub se: Geohash,
    pub s: Geohash,
    pub sw: Geohash,
    pub w: Geohash,
    pub nw: Geohash,
}

impl Neighbors {
    pub fn get(&self, direction: Direction) -> &Geohash {
        match direction {
            Direction::North => &self.n,
            Direction::NorthEast => &self.ne,
            Direction::East => &self.e,
            Direction::SouthEast => &self.se,
            Direction::South => &self.s,
            Direction::SouthWest => &self.sw,
            Direction::West => &self.w,
            Direction::NorthWest => &self.nw,
        }
    }

    /// `(direction, cell)` pairs clockwise from north.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &Geohash)> + '_ {
        Direction::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    pub fn to_vec(&self) -> Vec<Geohash> {
        self.iter().map(|(_, g)| *g).collect()
    }
}

impl Geohash {
    /// The adjacent cell in `direction`, at the same precision and encoding.
    ///
    /// Diagonals apply the latitude step and the longitude step
    /// independently; the axes never interact, so the order is irrelevant.
    ///
    /// ```
    /// use flexgeohash::{Direction, Encoding, Geohash};
    ///
    /// let geohash = Geohash::parse("xn76urx", Encoding::Base32)?;
    /// assert_eq!(geohash.neighbor(Direction::North).hash(), "xn76urz");
    /// assert_eq!(geohash.neighbor(Direction::East).hash(), "xn76ux8");
    /// # Ok::<(), flexgeohash::GeohashError>(())
    /// ```
    pub fn neighbor(&self, direction: Direction) -> Geohash {
        let (lat, lng) = self.lattice();
        let (lat_offset, lng_offset) = direction.offsets();
        self.with_lattice(
            shift_axis(lat, cell_step(self.lat_bits()), lat_offset),
            shift_axis(lng, cell_step(self.lng_bits()), lng_offset),
        )
    }

    /// North, east, south and west neighbors.
    pub fn adjacent(&self) -> [Geohash; 4] {
        Direction::CARDINALS.map(|d| self.neighbor(d))
    }

    /// All eight surrounding cells.
    pub fn neighbors(&self) -> Neighbors {
        Neighbors {
            n: self.neighbor(Direction::North),
            ne: self.neighbor(Direction::NorthEast),
            e: self.neighbor(Direction::East),
            se: self.neighbor(Direction::SouthEast),
            s: self.neighbor(Direction::South),
            sw: self.neighbor(Direction::SouthWest),
            w: self.neighbor(Direction::West),
            nw: self.neighbor(Direction::NorthWest),
        }
    }
}
