use rand::Rng;

const PERIOD: usize = 256;

/// Edge midpoints of a cube, used as lattice gradients.
const GRADIENTS: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

/// Three dimensional gradient noise over a randomly drawn lookup table.
///
/// Output is smooth, lies roughly within `[-1, 1]` and repeats every 256 units along each axis.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseField {
    perm: [u8; 2 * PERIOD],
}

impl NoiseField {
    /// Draw a fresh lookup table from `rng`.
    ///
    /// Every slot is an independent uniform draw, so the table is not necessarily a permutation.
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut table = [0u8; PERIOD];
        for slot in &mut table {
            *slot = rng.random();
        }
        Self::from_table(&table)
    }

    /// Build from an explicit 256 entry table, mirrored to 512 entries.
    pub fn from_table(table: &[u8; PERIOD]) -> Self {
        let mut perm = [0u8; 2 * PERIOD];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = table[i % PERIOD];
        }
        Self { perm }
    }

    /// The 256 entry table this field was built from.
    pub fn table(&self) -> &[u8] {
        &self.perm[..PERIOD]
    }

    fn hash(&self, index: usize) -> usize {
        usize::from(self.perm[index])
    }

    /// Sample the field at `(x, y, z)`.
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let (xf, yf, zf) = (x.floor(), y.floor(), z.floor());
        let xi = (xf as i64).rem_euclid(PERIOD as i64) as usize;
        let yi = (yf as i64).rem_euclid(PERIOD as i64) as usize;
        let zi = (zf as i64).rem_euclid(PERIOD as i64) as usize;
        let (x, y, z) = (x - xf, y - yf, z - zf);

        let corner = |i: usize, j: usize, k: usize| {
            let g = self.hash(xi + i + self.hash(yi + j + self.hash(zi + k))) % GRADIENTS.len();
            let [gx, gy, gz] = GRADIENTS[g];
            gx * (x - i as f64) + gy * (y - j as f64) + gz * (z - k as f64)
        };

        let (u, v, w) = (fade(x), fade(y), fade(z));

        let x00 = mix(corner(0, 0, 0), corner(1, 0, 0), u);
        let x10 = mix(corner(0, 1, 0), corner(1, 1, 0), u);
        let x01 = mix(corner(0, 0, 1), corner(1, 0, 1), u);
        let x11 = mix(corner(0, 1, 1), corner(1, 1, 1), u);

        let xy0 = mix(x00, x10, v);
        let xy1 = mix(x01, x11, v);

        mix(xy0, xy1, w)
    }
}

/// Quintic smoothstep `6t^5 - 15t^4 + 10t^3`.
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn mix(a: f64, b: f64, t: f64) -> f64 {
    (1.0 - t) * a + t * b
}
