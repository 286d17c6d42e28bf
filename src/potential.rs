//! Catalog of implicit potentials Φ with analytic gradients ∇Φ.
//!
//! Every surface the marcher can mesh is a variant of [`Potential`]; the
//! registry name is only consulted once, in [`Potential::from_name`], and
//! evaluation dispatches on the variant from then on. The marcher needs
//! exactly two operations per kind: `value` and `gradient`.

use crate::errors::PotentialError;
use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// Critical angular velocity scale for [`Potential::RotateRoche`],
/// √(4π²/(27 G M_⊙ yr²)) in the mesher's natural units. Every digit is
/// load-bearing: meshes are only reproducible if this constant never
/// changes.
const ROTATION_RATE_SCALE: Real = 0.54433105395181736;

/// An implicit equipotential surface, meshed as the level set Φ(r) = 0.
///
/// Parameters are bound at construction and immutable for the duration
/// of a mesh run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Potential {
    /// Φ = x² + y² + z² − R²
    Sphere {
        radius: Real,
    },
    /// Aligned Roche potential of a binary in a circular orbit:
    /// Φ = 1/|r| + q(1/|r − (d,0,0)| − x/d²) + ½f²(1+q)(x²+y²) − Ω
    ///
    /// `d` is the instantaneous separation, `q` the mass ratio, `f` the
    /// synchronicity parameter and `omega` the surface potential value.
    BinaryRoche {
        d: Real,
        q: Real,
        f: Real,
        omega: Real,
    },
    /// Roche potential with the stellar spin axis tilted away from the
    /// orbital axis by Euler angles (θ, φ). The centrifugal term becomes
    /// a full quadratic form in the rotated coordinates.
    MisalignedBinaryRoche {
        d: Real,
        q: Real,
        f: Real,
        theta: Real,
        phi: Real,
        omega: Real,
    },
    /// Single rotating star: Φ = 1/Ω_n − 1/|r| − ½ω²(x²+y²), with
    /// ω = f·[`ROTATION_RATE_SCALE`].
    RotateRoche {
        f: Real,
        omega_norm: Real,
    },
    /// Φ = r_minor² − r_major² + 2·r_major·√(x²+y²) − |r|²
    Torus {
        major: Real,
        minor: Real,
    },
    /// The sextic heart surface. Takes no parameters.
    Heart,
}

impl Potential {
    /// Look up a potential by registry name and bind its parameter vector.
    ///
    /// Arities: `Sphere` 1, `BinaryRoche` 3 or 4 (Ω defaults to 0),
    /// `MisalignedBinaryRoche` 5 or 6 (Ω defaults to 0), `RotateRoche` 2,
    /// `Torus` 2, `Heart` 1 (a placeholder scalar, ignored).
    pub fn from_name(name: &str, params: &[Real]) -> Result<Self, PotentialError> {
        let wrong = |kind: &'static str| PotentialError::WrongParameterCount {
            kind,
            got: params.len(),
        };

        match name {
            "Sphere" => match *params {
                [radius] => Ok(Self::Sphere { radius }),
                _ => Err(wrong("Sphere")),
            },
            "BinaryRoche" => match *params {
                [d, q, f] => Ok(Self::BinaryRoche { d, q, f, omega: 0.0 }),
                [d, q, f, omega] => Ok(Self::BinaryRoche { d, q, f, omega }),
                _ => Err(wrong("BinaryRoche")),
            },
            "MisalignedBinaryRoche" => match *params {
                [d, q, f, theta, phi] => Ok(Self::MisalignedBinaryRoche {
                    d,
                    q,
                    f,
                    theta,
                    phi,
                    omega: 0.0,
                }),
                [d, q, f, theta, phi, omega] => Ok(Self::MisalignedBinaryRoche {
                    d,
                    q,
                    f,
                    theta,
                    phi,
                    omega,
                }),
                _ => Err(wrong("MisalignedBinaryRoche")),
            },
            "RotateRoche" => match *params {
                [f, omega_norm] => Ok(Self::RotateRoche { f, omega_norm }),
                _ => Err(wrong("RotateRoche")),
            },
            "Torus" => match *params {
                [major, minor] => Ok(Self::Torus { major, minor }),
                _ => Err(wrong("Torus")),
            },
            "Heart" => match *params {
                [_] => Ok(Self::Heart),
                _ => Err(wrong("Heart")),
            },
            _ => Err(PotentialError::UnavailablePotential(name.to_string())),
        }
    }

    /// Registry name of this kind.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sphere { .. } => "Sphere",
            Self::BinaryRoche { .. } => "BinaryRoche",
            Self::MisalignedBinaryRoche { .. } => "MisalignedBinaryRoche",
            Self::RotateRoche { .. } => "RotateRoche",
            Self::Torus { .. } => "Torus",
            Self::Heart => "Heart",
        }
    }

    /// Φ(r).
    pub fn value(&self, r: &Point3<Real>) -> Real {
        let (x, y, z) = (r.x, r.y, r.z);
        match *self {
            Self::Sphere { radius } => x * x + y * y + z * z - radius * radius,
            Self::BinaryRoche { d, q, f, omega } => {
                let rsq = x * x + y * y + z * z;
                let rhosq = (x - d) * (x - d) + y * y + z * z;
                1.0 / rsq.sqrt() + q * (1.0 / rhosq.sqrt() - x / d / d)
                    + 0.5 * f * f * (1.0 + q) * (x * x + y * y)
                    - omega
            },
            Self::MisalignedBinaryRoche {
                d,
                q,
                f,
                theta,
                phi,
                omega,
            } => {
                let st_sq = theta.sin().powi(2);
                let delta = (1.0 - phi.cos().powi(2) * st_sq) * x * x
                    + (1.0 - phi.sin().powi(2) * st_sq) * y * y
                    + st_sq * z * z
                    - st_sq * (2.0 * phi).sin() * x * y
                    - (2.0 * theta).sin() * phi.cos() * x * z
                    - (2.0 * theta).sin() * phi.sin() * y * z;
                let rsq = x * x + y * y + z * z;
                let rhosq = (x - d) * (x - d) + y * y + z * z;
                1.0 / rsq.sqrt() + q * (1.0 / rhosq.sqrt() - x / d / d)
                    + 0.5 * f * f * (1.0 + q) * delta
                    - omega
            },
            Self::RotateRoche { f, omega_norm } => {
                let w = f * ROTATION_RATE_SCALE;
                let rp = (x * x + y * y + z * z).sqrt();
                1.0 / omega_norm - 1.0 / rp - 0.5 * w * w * (x * x + y * y)
            },
            Self::Torus { major, minor } => {
                minor * minor - major * major + 2.0 * major * (x * x + y * y).sqrt()
                    - x * x
                    - y * y
                    - z * z
            },
            Self::Heart => {
                let base = x * x + 9.0 / 4.0 * y * y + z * z - 1.0;
                base.powi(3) - x * x * z.powi(3) - 9.0 / 80.0 * y * y * z.powi(3)
            },
        }
    }

    /// ∇Φ(r), the analytic derivative of [`value`](Self::value) term by
    /// term.
    pub fn gradient(&self, r: &Point3<Real>) -> Vector3<Real> {
        let (x, y, z) = (r.x, r.y, r.z);
        match *self {
            Self::Sphere { .. } => Vector3::new(2.0 * x, 2.0 * y, 2.0 * z),
            Self::BinaryRoche { d, q, f, .. } => {
                let rm = (x * x + y * y + z * z).powf(-1.5);
                let rhom = ((x - d) * (x - d) + y * y + z * z).powf(-1.5);
                let cf = f * f * (1.0 + q);
                Vector3::new(
                    -x * rm - q * (x - d) * rhom - q / d / d + cf * x,
                    -y * rm - q * y * rhom + cf * y,
                    -z * rm - q * z * rhom,
                )
            },
            Self::MisalignedBinaryRoche {
                d,
                q,
                f,
                theta,
                phi,
                ..
            } => {
                let rm = (x * x + y * y + z * z).powf(-1.5);
                let rhom = ((x - d) * (x - d) + y * y + z * z).powf(-1.5);
                let cf = 0.5 * f * f * (1.0 + q);
                let st_sq = theta.sin().powi(2);
                let ddx = 2.0 * (1.0 - phi.cos().powi(2) * st_sq) * x
                    - st_sq * (2.0 * phi).sin() * y
                    - (2.0 * theta).sin() * phi.cos() * z;
                let ddy = 2.0 * (1.0 - phi.sin().powi(2) * st_sq) * y
                    - st_sq * (2.0 * phi).sin() * x
                    - (2.0 * theta).sin() * phi.sin() * z;
                let ddz = 2.0 * st_sq * z
                    - (2.0 * theta).sin() * phi.cos() * x
                    - (2.0 * theta).sin() * phi.sin() * y;
                Vector3::new(
                    -x * rm - q * (x - d) * rhom - q / d / d + cf * ddx,
                    -y * rm - q * y * rhom + cf * ddy,
                    -z * rm - q * z * rhom + cf * ddz,
                )
            },
            Self::RotateRoche { f, .. } => {
                let w = f * ROTATION_RATE_SCALE;
                let rm = (x * x + y * y + z * z).powf(-1.5);
                Vector3::new(x * rm - w * w * x, y * rm - w * w * y, z * rm)
            },
            Self::Torus { major, .. } => {
                let pm = (x * x + y * y).powf(-0.5);
                Vector3::new(
                    2.0 * major * x * pm - 2.0 * x,
                    2.0 * major * y * pm - 2.0 * y,
                    -2.0 * z,
                )
            },
            Self::Heart => {
                let base_sq = (x * x + 9.0 / 4.0 * y * y + z * z - 1.0).powi(2);
                Vector3::new(
                    3.0 * base_sq * 2.0 * x - 2.0 * x * z.powi(3),
                    3.0 * base_sq * 9.0 / 2.0 * y - 9.0 / 40.0 * y * z.powi(3),
                    3.0 * base_sq * 2.0 * z - 3.0 * x * x * z * z - 27.0 / 80.0 * y * y * z * z,
                )
            },
        }
    }
}
