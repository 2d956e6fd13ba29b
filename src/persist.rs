//! Binary persistence for the enumerated game tree

use std::io::{Read, Write};

use byteorder::{ReadBytesExt, WriteBytesExt, BE};

use crate::board::Board;
use crate::error::{Error, Result};
use crate::game_tree::{GameTree, Stats};

/// Magic constant identifying a serialized game tree
pub const MAGIC: u64 = 0xB5DE_AD01_1514_5103;

impl GameTree {
    /// Write the structure in its fixed big-endian layout.
    ///
    /// Both sections are sorted by ascending board key before writing so
    /// the output is byte-stable across runs; child lists are written in
    /// stored order, never re-sorted.
    ///
    /// The layout is
    ///
    /// ```text
    /// i32  stats count
    /// i32  tree count
    /// u64  magic
    /// stats count x { u32 key; u32 first wins; u32 second wins; u32 ties }
    /// tree count  x { u32 node; i32 child count; child count x u32 child }
    /// ```
    ///
    /// # Errors
    ///
    /// Any write failure surfaces the underlying [`std::io::Error`]
    /// unchanged.
    pub fn save<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_i32::<BE>(self.stats.len() as i32)?;
        writer.write_i32::<BE>(self.tree.len() as i32)?;
        writer.write_u64::<BE>(MAGIC)?;

        let mut stats_keys: Vec<Board> = self.stats.keys().copied().collect();
        stats_keys.sort_unstable();
        for key in stats_keys {
            let entry = self.stats[&key];
            writer.write_u32::<BE>(key.bits())?;
            writer.write_u32::<BE>(entry.first_wins)?;
            writer.write_u32::<BE>(entry.second_wins)?;
            writer.write_u32::<BE>(entry.ties)?;
        }

        let mut tree_keys: Vec<Board> = self.tree.keys().copied().collect();
        tree_keys.sort_unstable();
        for node in tree_keys {
            let children = &self.tree[&node];
            writer.write_u32::<BE>(node.bits())?;
            writer.write_i32::<BE>(children.len() as i32)?;
            for child in children {
                writer.write_u32::<BE>(child.bits())?;
            }
        }

        Ok(())
    }

    /// Read a structure previously written by [`GameTree::save`].
    ///
    /// # Errors
    ///
    /// [`Error::CorruptData`] when the magic constant does not match; any
    /// short read surfaces the underlying [`std::io::Error`] unchanged.
    /// No partial structure is exposed on failure.
    pub fn load<R: Read>(reader: &mut R) -> Result<GameTree> {
        let stats_count = reader.read_i32::<BE>()?;
        let tree_count = reader.read_i32::<BE>()?;

        let found = reader.read_u64::<BE>()?;
        if found != MAGIC {
            return Err(Error::CorruptData { found });
        }

        let mut tree = GameTree::default();

        for _ in 0..stats_count {
            let key = Board::from_bits(reader.read_u32::<BE>()?);
            let entry = Stats {
                first_wins: reader.read_u32::<BE>()?,
                second_wins: reader.read_u32::<BE>()?,
                ties: reader.read_u32::<BE>()?,
            };
            tree.stats.insert(key, entry);
        }

        for _ in 0..tree_count {
            let node = Board::from_bits(reader.read_u32::<BE>()?);
            let child_count = reader.read_i32::<BE>()?;

            let mut children = Vec::with_capacity(child_count.max(0) as usize);
            for _ in 0..child_count {
                children.push(Board::from_bits(reader.read_u32::<BE>()?));
            }
            tree.tree.insert(node, children);
        }

        Ok(tree)
    }
}
