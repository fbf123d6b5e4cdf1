// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

//! Textual dump of a [`SkipList`] for eyeballing its lanes. The format is
//! for humans and may change at any time.

use std::fmt::{
    self,
    Debug,
    Display,
};

use crate::skiplist::{
    skiplist::SkipList,
    skipnode::Lane,
};

impl<T: Debug, G> SkipList<T, G> {
    /// Renders the head row followed by one line per node in base order.
    ///
    /// Each lane cell reads `X -> v` when linked to `v`, `X -> .` when linked
    /// with nothing after it, and `-` when the row is not on that lane.
    pub fn render_debug(&self) -> String {
        self.to_string()
    }

    fn write_lane(&self, f: &mut fmt::Formatter<'_>, lane: Lane) -> fmt::Result {
        match lane {
            | Lane::Vacant => write!(f, " | -"),
            | Lane::Linked(None) => write!(f, " | X -> ."),
            | Lane::Linked(Some(id)) => write!(f, " | X -> {:?}", self.nodes[id.index()].value),
        }
    }
}

impl<T: Debug, G> Display for SkipList<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.first {
            | Some(id) => write!(f, "REF < {:?} >", self.nodes[id.index()].value)?,
            | None => write!(f, "REF < . >")?,
        }
        for lane in self.head.iter() {
            self.write_lane(f, *lane)?;
        }
        write!(f, " |")?;

        let mut cursor = self.first;
        while let Some(id) = cursor {
            let node = &self.nodes[id.index()];
            write!(f, "\n< {:?} >", node.value)?;
            for lane in node.lanes.iter() {
                self.write_lane(f, *lane)?;
            }
            write!(f, " |")?;
            cursor = node.next;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::skiplist::skiplist::{
        tests::scripted,
        SkipList,
    };

    #[test]
    fn test_render_empty() {
        let list = SkipList::<i32>::new(4).unwrap();
        assert_eq!(list.render_debug(), "REF < . > | X -> . | X -> . | X -> . |");
    }

    #[test]
    fn test_render_layout() {
        let mut list = scripted(3, &[1, 0]);
        list.insert(10);
        list.insert(20);
        assert_eq!(
            list.render_debug(),
            "REF < 10 > | X -> 10 | X -> . |\n< 10 > | X -> . | - |\n< 20 > | - | - |"
        );
    }

    #[test]
    fn test_render_is_read_only() {
        let mut list = scripted(4, &[3, 1, 2, 0, 1]);
        for value in [4, 8, 15, 16, 23] {
            list.insert(value);
        }
        let before = list.render_debug();
        assert_eq!(before.lines().count(), 6);
        assert_eq!(list.render_debug(), before);
        assert_eq!(format!("{}", list), before);
        list.check_invariants();
    }
}
