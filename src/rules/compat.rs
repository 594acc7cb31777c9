use crate::catalog::{BankCatalog, PairKey, PointId, PointKind};
use crate::session::WireConnection;
use ahash::AHashSet;

/// Computes the set of legal next targets for a wire starting at `source_id`.
///
/// The result drives highlighting in both input modalities. It is advisory:
/// a superset of the plausible targets, not the authoritative correctness
/// check. Whether a committed wire is actually correct is decided by the
/// validator against the required set.
///
/// Rules, per candidate target:
/// 1. already-wired pairs are skipped;
/// 2. same-kind pairs on the same side are rejected, with
///    neutral-to-neutral as the one exception (this is the only rule the
///    point's role feeds: a source-side phase and a transformer-side
///    bushing of the same kind stay candidates);
/// 3. primary-to-secondary is accepted in either order;
/// 4. anything involving a neutral is accepted;
/// 5. anything involving a ground is accepted;
/// 6. any remaining pair is accepted only if it appears in the bank's
///    required set.
///
/// # Panics
///
/// Panics if `source_id` is not a point of the catalog. That means the
/// configuration loader let a bad reference through, which is a defect
/// rather than a recoverable user error.
pub fn compatible_points(
    catalog: &BankCatalog,
    connections: &[WireConnection],
    source_id: &str,
) -> AHashSet<PointId> {
    let source = catalog.expect_point(source_id);
    let wired: AHashSet<PairKey> = connections.iter().map(|c| c.key()).collect();

    catalog
        .points()
        .iter()
        .filter(|target| target.id != source.id)
        .filter(|target| {
            let pair = PairKey::new(source.id.clone(), target.id.clone());
            if wired.contains(&pair) {
                return false;
            }
            if source.kind == target.kind
                && source.role == target.role
                && source.kind != PointKind::Neutral
            {
                return false;
            }
            let kinds = (source.kind, target.kind);
            if matches!(
                kinds,
                (PointKind::Primary, PointKind::Secondary)
                    | (PointKind::Secondary, PointKind::Primary)
            ) {
                return true;
            }
            if source.kind == PointKind::Neutral || target.kind == PointKind::Neutral {
                return true;
            }
            if source.kind == PointKind::Ground || target.kind == PointKind::Ground {
                return true;
            }
            catalog.is_required(&pair)
        })
        .map(|target| target.id.clone())
        .collect()
}
