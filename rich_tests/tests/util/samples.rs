// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Plain text with single spaces and no word longer than 14 characters.
pub(crate) const LOREM_IPSUM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
Mauris a erat vitae risus convallis pellentesque. Sed ultrices neque nec lectus vehicula, \
quis posuere nulla fermentum. Vestibulum ante ipsum primis in faucibus orci luctus et \
ultrices posuere cubilia curae; Integer semper dui quis arcu tincidunt, non tristique purus \
maximus.";

/// Help text using every markup tag.
pub(crate) const HELP_PAGE: &str = "<b>Moving around</b><br/>\
Press <kbd>Alt-Left</kbd> to go back, or follow a <a href='help:links'>link</a> with \
<kbd>Enter</kbd>. <font color='yellow'>Yellow</font> text is <em>important</em>, \
<small>small</small> text is not. Type <tt>quit</tt> to <u>leave</u>.";
