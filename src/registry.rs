//! Variant registry: the closed set of Smith-Waterman variants.
//!
//! Each [`Variant`] maps to exactly one entry point, and the entry point's
//! shape is its calling convention. Adding a variant means adding an enum
//! member, and the compiler then points at every match that must learn about it.

use crate::alignment::{self, BatchFn, PerElementFn, Score};
use crate::capability::CapabilityFlags;
use crate::corpus::Corpus;
use crate::error::BenchError;
use std::fmt;
use std::str::FromStr;

/// The benchmarked implementations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Base,
    Windowed,
    MulticoreWindowed,
    Bithacked,
    BithackedStriped,
    SimdAlpern,
    MulticoreAlpern,
}

/// How the harness invokes a variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallingConvention {
    /// Once per sequence pair; the harness iterates
    PerElement,
    /// Once with the whole corpus; the variant iterates, threads, or vectorizes
    Batch,
}

impl fmt::Display for CallingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CallingConvention::PerElement => "per-element",
            CallingConvention::Batch => "batch",
        })
    }
}

/// A variant's entry point. The tag doubles as its calling convention.
#[derive(Clone, Copy, Debug)]
pub enum EntryPoint {
    PerElement(PerElementFn),
    Batch(BatchFn),
}

/// Everything the driver needs to run a variant
#[derive(Clone, Copy, Debug)]
pub struct VariantDescriptor {
    pub variant: Variant,
    /// Human-readable description
    pub description: &'static str,
    pub entry: EntryPoint,
}

impl VariantDescriptor {
    pub fn convention(&self) -> CallingConvention {
        match self.entry {
            EntryPoint::PerElement(_) => CallingConvention::PerElement,
            EntryPoint::Batch(_) => CallingConvention::Batch,
        }
    }

    /// Run the variant over `corpus` without timing it, returning the corpus total.
    pub fn score_corpus(
        &self,
        corpus: &Corpus,
        capability: CapabilityFlags,
    ) -> Result<Score, BenchError> {
        let result = match self.entry {
            EntryPoint::PerElement(f) => corpus.iter().map(f).sum(),
            EntryPoint::Batch(f) => f(corpus, capability),
        };
        result.map_err(|source| BenchError::Invocation {
            variant: self.variant,
            source,
        })
    }
}

impl Variant {
    /// Every variant, in canonical order
    pub const ALL: [Variant; 7] = [
        Variant::Base,
        Variant::Windowed,
        Variant::MulticoreWindowed,
        Variant::Bithacked,
        Variant::BithackedStriped,
        Variant::SimdAlpern,
        Variant::MulticoreAlpern,
    ];

    /// Identifier accepted on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Base => "base",
            Variant::Windowed => "windowed",
            Variant::MulticoreWindowed => "multicore-windowed",
            Variant::Bithacked => "bithacked",
            Variant::BithackedStriped => "bithacked-striped",
            Variant::SimdAlpern => "simd-alpern",
            Variant::MulticoreAlpern => "multicore-alpern",
        }
    }

    pub fn descriptor(self) -> VariantDescriptor {
        let (description, entry) = match self {
            Variant::Base => (
                "Scalar two-row dynamic program (baseline)",
                EntryPoint::PerElement(alignment::sw_base as PerElementFn),
            ),
            Variant::Windowed => (
                "Cache-blocked column windows",
                EntryPoint::Batch(alignment::sw_windowed as BatchFn),
            ),
            Variant::MulticoreWindowed => (
                "Cache-blocked windows, pairs spread over the worker pool",
                EntryPoint::Batch(alignment::sw_multicore_windowed as BatchFn),
            ),
            Variant::Bithacked => (
                "2-bit packed bases, 32 match tests per XOR",
                EntryPoint::PerElement(alignment::sw_bithacked as PerElementFn),
            ),
            Variant::BithackedStriped => (
                "Farrar striped query profile over packed bases",
                EntryPoint::PerElement(alignment::sw_bithacked_striped as PerElementFn),
            ),
            Variant::SimdAlpern => (
                "Inter-sequence SIMD, one pair per vector lane",
                EntryPoint::Batch(alignment::sw_simd_alpern as BatchFn),
            ),
            Variant::MulticoreAlpern => (
                "Inter-sequence SIMD groups spread over the worker pool",
                EntryPoint::Batch(alignment::sw_multicore_alpern as BatchFn),
            ),
        };

        VariantDescriptor {
            variant: self,
            description,
            entry,
        }
    }

    pub fn convention(self) -> CallingConvention {
        self.descriptor().convention()
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| BenchError::UnknownVariant(s.to_string()))
    }
}

/// Look up a variant by its command-line identifier.
///
/// # Example
/// ```
/// use sw_bench::registry::{resolve, CallingConvention};
///
/// assert_eq!(resolve("base").unwrap().convention(), CallingConvention::PerElement);
/// assert!(resolve("bogus").is_err());
/// ```
pub fn resolve(identifier: &str) -> Result<VariantDescriptor, BenchError> {
    identifier.parse::<Variant>().map(Variant::descriptor)
}

/// Descriptors of every variant
pub fn all() -> impl Iterator<Item = VariantDescriptor> {
    Variant::ALL.into_iter().map(Variant::descriptor)
}

/// List variant names
pub fn list_names() -> Vec<&'static str> {
    Variant::ALL.iter().map(|v| v.name()).collect()
}

/// List variants by calling convention
pub fn by_convention(convention: CallingConvention) -> Vec<VariantDescriptor> {
    all().filter(|d| d.convention() == convention).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_every_name() {
        for variant in Variant::ALL {
            let descriptor = resolve(variant.name()).unwrap();
            assert_eq!(descriptor.variant, variant);
        }
    }

    #[test]
    fn test_conventions() {
        use CallingConvention::*;
        let expected = [
            ("base", PerElement),
            ("windowed", Batch),
            ("multicore-windowed", Batch),
            ("bithacked", PerElement),
            ("bithacked-striped", PerElement),
            ("simd-alpern", Batch),
            ("multicore-alpern", Batch),
        ];
        for (name, convention) in expected {
            assert_eq!(resolve(name).unwrap().convention(), convention, "{}", name);
        }
    }

    #[test]
    fn test_resolve_unknown() {
        for bogus in ["bogus", "", "Base", "simd_alpern", " base"] {
            match resolve(bogus) {
                Err(BenchError::UnknownVariant(id)) => assert_eq!(id, bogus),
                other => panic!("expected UnknownVariant for {:?}, got {:?}", bogus, other),
            }
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names = list_names();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Variant::ALL.len());
    }

    #[test]
    fn test_by_convention_partitions() {
        let per_element = by_convention(CallingConvention::PerElement);
        let batch = by_convention(CallingConvention::Batch);
        assert_eq!(per_element.len(), 3);
        assert_eq!(batch.len(), 4);
    }

    #[test]
    fn test_display_round_trips() {
        for variant in Variant::ALL {
            assert_eq!(variant.to_string().parse::<Variant>().unwrap(), variant);
        }
    }
}
