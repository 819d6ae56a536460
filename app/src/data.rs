//! The portfolio's project records.
//!
//! Cards and the detail modal both read from [`PROJECTS`]; the order here is
//! the order of the grid.

use crate::i18n::Text;
use crate::types::{Category, PdfLink, Project, ProjectKind, ProjectLinks};

pub static PROJECTS: &[Project] = &[
    Project {
        id: "z-pinch-sim",
        title: Text::new(
            "Z-Pinch MHD Stability Simulation",
            "Simulación MHD de Estabilidad en Z-Pinch",
        ),
        category: Category::PlasmaPhysics,
        kind: ProjectKind::Simulation,
        short_description: Text::new(
            "Numerical resistive-MHD framework to study Z-pinch stability and characterize sausage/kink modes across operating regimes.",
            "Marco numérico MHD resistivo para estudiar la estabilidad de un Z-pinch y caracterizar modos sausage/kink en distintos regímenes.",
        ),
        overview: Some(Text::new(
            "Developed a modular resistive-MHD code to explore how current and pressure profiles drive Z-pinch instabilities, with diagnostics focused on mode growth, nonlinear evolution, and interpretability for plasma-physics studies.",
            "Desarrollé un código MHD resistivo y modular para explorar cómo perfiles de corriente y presión disparan inestabilidades en Z-pinch, con diagnósticos centrados en crecimiento modal, evolución no lineal e interpretabilidad.",
        )),
        image: "/images/zpinch-sim.gif",
        detail_image: None,
        achievements: &[
            Text::new(
                "Implemented a resistive-MHD solver to model time evolution of an axial Z-pinch configuration.",
                "Implementé un solucionador MHD resistivo para modelar la evolución temporal de una configuración axial de Z-pinch.",
            ),
            Text::new(
                "Reproduced characteristic sausage and kink behavior across multiple parameter regimes.",
                "Reproduje el comportamiento característico de modos sausage y kink en múltiples regímenes de parámetros.",
            ),
            Text::new(
                "Designed a code structure ready for extensions (additional physics, higher-dimensional geometries, improved boundary models).",
                "Diseñé una base de código lista para extensiones (más física, geometrías de mayor dimensión, mejores modelos de frontera).",
            ),
        ],
        technologies: &["Python", "NumPy", "SciPy", "Matplotlib"],
        links: ProjectLinks {
            github: Some("https://github.com/h4xter1612/ZPinchSim"),
            ..ProjectLinks::NONE
        },
    },
    Project {
        id: "pic-two-stream",
        title: Text::new(
            "PIC Simulation of Two-Stream Instability",
            "Simulación PIC de la Inestabilidad de Dos Flujos",
        ),
        category: Category::PlasmaPhysics,
        kind: ProjectKind::Simulation,
        short_description: Text::new(
            "1D electrostatic PIC simulation resolving nonlinear evolution of counter-streaming electron beams in periodic domains.",
            "Simulación PIC electrostática 1D que resuelve la evolución no lineal de haces electrónicos contra–propagantes en dominio periódico.",
        ),
        overview: Some(Text::new(
            "Built a full 1D electrostatic PIC pipeline to study instability growth, phase-space dynamics, and nonlinear saturation, with comparisons against theoretical expectations for validation.",
            "Construí un pipeline PIC electrostático 1D completo para estudiar crecimiento de la inestabilidad, dinámica en espacio de fase y saturación no lineal, comparando contra expectativas teóricas para validar.",
        )),
        image: "/images/two-stream.gif",
        detail_image: None,
        achievements: &[
            Text::new(
                "Implemented the full PIC loop: charge deposition, field solve, and particle push under periodic boundary conditions.",
                "Implementé el ciclo PIC completo: depósito de carga, solución del campo y avance de partículas con condiciones periódicas.",
            ),
            Text::new(
                "Reproduced exponential growth and compared with analytical growth-rate predictions.",
                "Reproduje el crecimiento exponencial y lo comparé con predicciones analíticas de tasa de crecimiento.",
            ),
            Text::new(
                "Generated phase-space and field-evolution diagnostics to analyze nonlinear saturation mechanisms.",
                "Generé diagnósticos de espacio de fase y evolución del campo para analizar mecanismos de saturación no lineal.",
            ),
        ],
        technologies: &["Python", "NumPy", "SciPy", "Matplotlib"],
        links: ProjectLinks {
            github: Some("https://github.com/h4xter1612/PIC-2StreamInst"),
            ..ProjectLinks::NONE
        },
    },
    Project {
        id: "two-fluid-plasma",
        title: Text::new(
            "Two-Fluid Plasma Wave Simulation (1D/2D)",
            "Simulación de Ondas en Plasma de Dos Fluidos (1D/2D)",
        ),
        category: Category::PlasmaPhysics,
        kind: ProjectKind::Simulation,
        short_description: Text::new(
            "Two-fluid plasma framework to study wave propagation and baseline instabilities across 1D/2D geometries with modular diagnostics.",
            "Marco numérico de dos fluidos para estudiar propagación de ondas e inestabilidades base en 1D/2D con diagnósticos modulares.",
        ),
        overview: Some(Text::new(
            "Implemented separate ion/electron dynamics coupled to field equations to validate dispersion behavior for multiple wave branches, enabling controlled parameter scans for plasma-physics interpretation.",
            "Implementé dinámica separada ion/electrón acoplada a ecuaciones de campo para validar dispersión en varias ramas de ondas, habilitando barridos de parámetros controlados para interpretación en plasmas.",
        )),
        image: "/images/two-fluid-plasma.gif",
        detail_image: None,
        achievements: &[
            Text::new(
                "Implemented a two-fluid model with ion/electron dynamics coupled to Maxwell-like field equations.",
                "Implementé un modelo de dos fluidos con dinámica de iones/electrones acoplada a ecuaciones tipo Maxwell.",
            ),
            Text::new(
                "Validated dispersion relations (R/L, O/X, electrostatic branches) against theoretical predictions.",
                "Validé relaciones de dispersión (ramas R/L, O/X y electrostáticas) frente a predicciones teóricas.",
            ),
            Text::new(
                "Built a modular structure to switch 1D/2D setups, boundary conditions, and parameter scans efficiently.",
                "Construí una estructura modular para cambiar eficientemente entre setups 1D/2D, condiciones de frontera y barridos de parámetros.",
            ),
        ],
        technologies: &["Python", "NumPy", "SciPy", "Matplotlib"],
        links: ProjectLinks {
            github: Some("https://github.com/h4xter1612/2FluidPlasmaSim"),
            ..ProjectLinks::NONE
        },
    },
    Project {
        id: "star-like-tokamak-equilibrium",
        title: Text::new(
            "STAR-like Spherical Tokamak Equilibrium (FreeGSNKE)",
            "Equilibrio de Tokamak Esférico tipo STAR (FreeGSNKE)",
        ),
        category: Category::PlasmaPhysics,
        kind: ProjectKind::Design,
        short_description: Text::new(
            "End-to-end Grad–Shafranov workflow to design and diagnose a STAR-inspired spherical tokamak equilibrium with a bean-shaped cross-section.",
            "Flujo completo Grad–Shafranov para diseñar y diagnosticar un equilibrio tipo STAR en tokamak esférico con sección en forma de frijol.",
        ),
        overview: Some(Text::new(
            "Built a STAR-like machine model and ran PF/CS current scans with a misfit metric to converge to low-aspect-ratio, high-elongation equilibria, then computed MHD-relevant diagnostics for interpretability and reporting.",
            "Construí un modelo de máquina tipo STAR y ejecuté barridos de corrientes PF/CS con una métrica de misfit para converger a equilibrios de baja razón de aspecto y alta elongación, calculando diagnósticos MHD para interpretabilidad y reporte.",
        )),
        image: "/images/star_tokamak.gif",
        detail_image: None,
        achievements: &[
            Text::new(
                "Modeled a STAR-like machine in FreeGSNKE, including vessel geometry and a dedicated PF/CS coil set.",
                "Modelé una máquina tipo STAR en FreeGSNKE, incluyendo geometría del vessel y un conjunto dedicado de bobinas PF/CS.",
            ),
            Text::new(
                "Implemented PF/CS current scans and a misfit-driven micro-optimization to obtain bean-shaped, positively triangular equilibria.",
                "Implementé barridos PF/CS y micro–optimización por misfit para obtener equilibrios tipo bean con triangularidad positiva.",
            ),
            Text::new(
                "Computed diagnostics (separatrix geometry, q(ψ), β_p, jφ(R,Z), shear) and generated a quasi-static ramp-up visualization.",
                "Calculé diagnósticos (separatriz, q(ψ), β_p, jφ(R,Z), cizalla) y generé una visualización de ramp-up cuasiestático.",
            ),
        ],
        technologies: &["Python", "NumPy", "Matplotlib", "FreeGSNKE"],
        links: ProjectLinks {
            github: Some("https://github.com/h4xter1612/STAR-like-tokamak-equilibrium"),
            pdf: Some(PdfLink::Single(
                "https://drive.google.com/file/d/1dsjF9RD1yCmZXFg2fVozWc6MIJ06WTZk/view?usp=sharing",
            )),
            website: None,
        },
    },
    Project {
        id: "grad-shafranov-derivation",
        title: Text::new(
            "Derivation of the Grad–Shafranov Equation for Tokamak Equilibrium",
            "Derivación de la Ecuación de Grad–Shafranov para el Equilibrio en un Tokamak",
        ),
        category: Category::PlasmaPhysics,
        kind: ProjectKind::Paper,
        short_description: Text::new(
            "Self-contained technical note deriving Grad–Shafranov from Maxwell’s equations and MHD force balance for axisymmetric tokamak equilibria.",
            "Nota técnica auto-contenida derivando Grad–Shafranov desde Maxwell y balance de fuerzas MHD para equilibrios axisimétricos en tokamaks.",
        ),
        overview: Some(Text::new(
            "Produced a clear, step-by-step derivation with geometric intuition (ψ, F(ψ), Δ* operator) and notation aligned with standard tokamak-equilibrium literature, suitable as a reference for future research work.",
            "Redacté una derivación paso a paso con intuición geométrica (ψ, F(ψ), operador Δ*) y notación alineada con literatura estándar de equilibrios, útil como referencia para trabajo futuro.",
        )),
        image: "/images/grad-shafranov.png",
        detail_image: None,
        achievements: &[
            Text::new(
                "Derived Grad–Shafranov from ∇·B=0, ∇×B=μ₀J, and J×B=∇p in cylindrical coordinates under toroidal symmetry.",
                "Derivé Grad–Shafranov desde ∇·B=0, ∇×B=μ₀J y J×B=∇p en coordenadas cilíndricas con simetría toroidal.",
            ),
            Text::new(
                "Explained the physical meaning of ψ(r,z), F(ψ), and the elliptic operator Δ*ψ for equilibrium reconstruction.",
                "Expliqué el significado físico de ψ(r,z), F(ψ) y el operador elíptico Δ*ψ para reconstrucción de equilibrios.",
            ),
            Text::new(
                "Delivered a polished LaTeX note (10+ pages) with consistent notation and annotations for reproducibility.",
                "Entregué una nota en LaTeX (10+ páginas) con notación consistente y anotaciones para reproducibilidad.",
            ),
        ],
        technologies: &["LaTeX", "Analytical MHD", "Plasma Physics", "Vector Calculus"],
        links: ProjectLinks {
            pdf: Some(PdfLink::Single(
                "https://drive.google.com/file/d/1BLHgM1FU4N-vCwcEa0CUFIDKKtpjzVj0/view?usp=sharing",
            )),
            ..ProjectLinks::NONE
        },
    },
];

/// Looks a project up by its stable id.
#[must_use]
pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}

/// Project named by a URL fragment such as `#z-pinch-sim`, so a shared link
/// opens its detail dialog. Section anchors like `#projects` match nothing.
#[must_use]
pub fn project_from_fragment(fragment: &str) -> Option<&'static Project> {
    let id = fragment.strip_prefix('#').unwrap_or(fragment).trim();
    if id.is_empty() { None } else { find_project(id) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_project_ids_are_unique() {
        let ids: HashSet<_> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn test_find_project() {
        let project = find_project("pic-two-stream").expect("project should exist");
        assert_eq!(project.title.en, "PIC Simulation of Two-Stream Instability");
        assert!(find_project("does-not-exist").is_none());
    }

    #[test]
    fn test_project_from_fragment() {
        assert_eq!(
            project_from_fragment("#z-pinch-sim").map(|p| p.id),
            Some("z-pinch-sim")
        );
        assert_eq!(
            project_from_fragment("pic-two-stream").map(|p| p.id),
            Some("pic-two-stream")
        );
        assert!(project_from_fragment("#projects").is_none());
        assert!(project_from_fragment("#").is_none());
        assert!(project_from_fragment("").is_none());
    }

    #[test]
    fn test_every_project_has_achievements_and_technologies() {
        for project in PROJECTS {
            assert!(!project.achievements.is_empty(), "{}", project.id);
            assert!(!project.technologies.is_empty(), "{}", project.id);
        }
    }
}
