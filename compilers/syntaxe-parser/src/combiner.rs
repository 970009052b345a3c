use syntaxe_protocol::{Block, BlockKind};

/// Pairs whose follower is folded into the leader:
/// complément du nom, infinitive complements, postposed épithètes.
fn absorbs(leader: BlockKind, follower: BlockKind) -> bool {
    matches!(
        (leader, follower),
        (BlockKind::NounGroup, BlockKind::PrepGroup)
            | (BlockKind::InfinitiveGroup, BlockKind::NounGroup)
            | (BlockKind::InfinitiveGroup, BlockKind::PrepGroup)
            | (BlockKind::NounGroup, BlockKind::AdjectiveGroup)
    )
}

/// Single left-to-right pass. A merged leader is not checked again against
/// the block after the one it consumed.
pub fn combine(blocks: Vec<Block<'_>>) -> Vec<Block<'_>> {
    let mut combined = Vec::with_capacity(blocks.len());
    let mut blocks = blocks.into_iter().peekable();

    while let Some(mut block) = blocks.next() {
        if let Some(follower) = blocks.next_if(|next| absorbs(block.kind, next.kind)) {
            block.absorb(follower);
        }
        combined.push(block);
    }

    combined
}
