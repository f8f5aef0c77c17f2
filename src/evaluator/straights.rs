use crate::cards::Rank;

/// Build a presence mask: bit `v` for each rank value `v`, plus bit 1 for an Ace
/// so it can close the wheel (A-2-3-4-5).
pub fn rank_mask<I>(ranks: I) -> u16
where
    I: IntoIterator<Item = Rank>,
{
    ranks.into_iter().fold(0u16, |mask, rank| {
        let mask = mask | (1 << rank.value());
        if rank == Rank::Ace {
            mask | 0b10
        } else {
            mask
        }
    })
}

/// Highest rank topping five consecutive ranks in `mask`, if any.
/// The wheel reports Five as its top rank.
pub fn top_straight(mask: u16) -> Option<Rank> {
    const RUN: u16 = 0b1_1111;
    (Rank::Five.value()..=Rank::Ace.value())
        .rev()
        .find(|&top| {
            let run = RUN << (top - 4);
            mask & run == run
        })
        .and_then(|top| Rank::try_from(top).ok())
}

/// The five ranks of the straight topped by `top`, highest first.
/// For the wheel the Ace comes last.
pub fn straight_ranks(top: Rank) -> [Rank; 5] {
    let v = top.value();
    // value 1 is the low Ace
    let at = |offset: u8| Rank::try_from(v - offset).unwrap_or(Rank::Ace);
    [at(0), at(1), at(2), at(3), at(4)]
}
